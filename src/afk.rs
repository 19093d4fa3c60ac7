/// The parts of a member's voice state the AFK check cares about
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoicePresence {
    pub channel_id: Option<u64>,
    pub self_deaf: bool,
}

/// What to do with a member's AFK timer after a voice state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfkAction {
    /// Start counting down
    Arm,
    /// Stop counting down
    Disarm,
    Ignore,
}

/// Decide how a voice state change affects the member's AFK timer.
///
/// `before` is `None` when the previous state is unknown, e.g. on first join.
pub fn classify(before: Option<VoicePresence>, after: VoicePresence) -> AfkAction {
    let before = before.unwrap_or_default();

    if after.self_deaf && !before.self_deaf {
        AfkAction::Arm
    } else if before.self_deaf && !after.self_deaf {
        AfkAction::Disarm
    } else if before.channel_id.is_some() && after.channel_id.is_none() {
        AfkAction::Disarm
    } else {
        AfkAction::Ignore
    }
}
