pub mod error;
pub mod i18n;
pub mod question;
pub mod record;
pub mod session;
pub mod stats;
pub mod store;
pub mod timer;

pub use error::{QuizError, StoreError};
pub use i18n::Language;
pub use question::{Question, Table, TableSelection};
pub use record::SessionRecord;
pub use session::{Feedback, QuizEvent, SelectionDraft, Session};
pub use stats::Statistics;
pub use store::ProgressStore;
