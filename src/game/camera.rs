use bevy::prelude::*;

/// Focus point the camera orbits; the landscape is centred on the origin.
#[derive(Component)]
pub struct Viewer;

#[derive(Component)]
pub struct OrbitCamera;

#[derive(Resource, Clone)]
pub struct OrbitCameraSettings {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCameraSettings {
    fn default() -> Self {
        Self {
            yaw: 0.8,
            pitch: 0.75,
            distance: 160.0,
        }
    }
}

impl OrbitCameraSettings {
    pub fn camera_transform(&self, focus: Vec3) -> Transform {
        let rot = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        let offset = rot * Vec3::new(0.0, 0.0, -self.distance);
        Transform::from_translation(focus + offset).looking_at(focus, Vec3::Y)
    }
}

pub fn setup_viewer(mut commands: Commands, settings: Res<OrbitCameraSettings>) {
    let focus = Vec3::ZERO;
    commands.spawn((Viewer, Transform::from_translation(focus)));

    commands.spawn((
        OrbitCamera,
        Camera3d::default(),
        settings.camera_transform(focus),
    ));
}
