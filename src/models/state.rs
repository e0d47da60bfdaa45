/// Which screen the application is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Editing teams, categories and questions.
    #[default]
    Setup,
    /// Board is up; a question modal may be open.
    Playing,
    /// Every cell has been answered and a winner picked.
    GameEnd,
}
