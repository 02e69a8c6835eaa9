/// What happened to one block during a step
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockOutcome {
    pub hand_touched: u32,
    pub floor_contacts: u32,
    pub fell_asleep: u32,
}

impl BlockOutcome {
    #[inline]
    pub fn merge(self, other: BlockOutcome) -> BlockOutcome {
        BlockOutcome {
            hand_touched: self.hand_touched + other.hand_touched,
            floor_contacts: self.floor_contacts + other.floor_contacts,
            fell_asleep: self.fell_asleep + other.fell_asleep,
        }
    }
}

/// Summary of one physics step
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepReport {
    /// dt actually integrated, after clamping
    pub dt: f32,
    pub blocks: u32,
    pub hand_touched: u32,
    pub floor_contacts: u32,
    pub fell_asleep: u32,
    pub pair_checks: u32,
    pub block_contacts: u32,
}
