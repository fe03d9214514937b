#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub enum TrackerState {
    #[default]
    Stopped,
    Starting,
    Started,
}
