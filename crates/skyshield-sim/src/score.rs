//! Running score tracked by the battery engine.

use skyshield_core::state::ScoreView;

/// Counters only ever increase during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub interceptions: u32,
    pub threats_launched: u32,
    pub interceptors_fired: u32,
    pub impacts: u32,
}

impl ScoreState {
    pub fn to_view(&self) -> ScoreView {
        ScoreView {
            interceptions: self.interceptions,
            threats_launched: self.threats_launched,
            interceptors_fired: self.interceptors_fired,
            impacts: self.impacts,
        }
    }
}
