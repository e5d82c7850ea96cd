pub mod account;
pub mod answer;
pub mod question;

pub use account::PostgresAccountRepository;
pub use answer::PostgresAnswerRepository;
pub use question::PostgresQuestionRepository;
