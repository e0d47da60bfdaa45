mod question;
mod setup;
mod state;
mod team;

pub use question::{Media, MediaKind, MediaSide, Question};
pub use setup::{QuestionMap, SetupExport};
pub use state::Screen;
pub use team::Team;
