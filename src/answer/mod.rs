pub mod kind;
pub mod matcher;
pub mod normalize;

pub use self::kind::{classify, Classification, QuestionKind};
pub use self::matcher::{check_answer, grade};
pub use self::normalize::normalize;
