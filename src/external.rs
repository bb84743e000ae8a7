use bevy::prelude::*;

use crate::hand::hand_rig::HandRig;
use crate::HandSet;

pub struct ExternalFeedPlugin;

impl Plugin for ExternalFeedPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ExternalAngles>()
            .init_resource::<DummyFeed>()
            .add_systems(
                Update,
                (publish_dummy_angles, receive_external_angles)
                    .chain()
                    .before(HandSet::FanOut),
            );
    }
}

/// An angle vector delivered by a source outside the core, in degrees.
///
/// Real transports (a ROS bridge, a device driver) publish this event; the
/// rig consumes it opaquely.
#[derive(Event, Debug, Clone)]
pub struct ExternalAngles(pub Vec<f32>);

/// Stand-in publisher for exercising external mode without a real bridge.
///
/// Oscillates every joint slowly while enabled from the panel.
#[derive(Resource, Debug, Default)]
pub struct DummyFeed {
    pub enabled: bool,
    phase: f32,
}

fn publish_dummy_angles(
    mut feed: ResMut<DummyFeed>,
    hand_rig: Res<HandRig>,
    time: Res<Time>,
    mut external_evw: EventWriter<ExternalAngles>,
) {
    if feed.enabled == false {
        return;
    }

    feed.phase += time.delta_seconds();
    let angle = f32::sin(feed.phase) * 30.0;
    external_evw.send(ExternalAngles(vec![angle; hand_rig.joints.len()]));
}

fn receive_external_angles(
    mut hand_rig: ResMut<HandRig>,
    mut external_evr: EventReader<ExternalAngles>,
) {
    for angles in external_evr.read() {
        if hand_rig.set_external_input(&angles.0) == false {
            warn!("Input mode is not set to External. Input not processed.");
        }
    }
}
