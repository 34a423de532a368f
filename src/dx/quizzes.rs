//! Quizzes module.
//!
//! Quiz session actions of the account area: starting a quiz attempt and
//! submitting its answers for grading. These are domain actions on the
//! `quizzes` collection, not CRUD verbs — both go out as `POST
//! quizzes/<action>` with the quiz id in the body.

use derive_builder::Builder;
use serde_json::json;

use crate::{
    core::{AcademyError, Deserializer, Transport},
    dx::client::AcademyClientInstance,
};

pub(crate) const QUIZZES_PATH: &str = "quizzes";

/// A started quiz attempt.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct QuizSession {
    /// Attempt identifier; echo it back when checking answers.
    pub session_id: String,

    /// The quiz this attempt belongs to.
    pub quiz_id: u64,

    /// Time limit in milliseconds, when the quiz has one.
    #[serde(default)]
    pub time_limit: Option<u64>,
}

/// Grading outcome of a quiz attempt.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct QuizResult {
    /// Attempt status (`passed`, `failed`, `pending`).
    pub status: String,

    /// Score in percent.
    #[serde(default)]
    pub score: Option<f64>,

    #[serde(default)]
    pub correct_answers: Option<u32>,

    #[serde(default)]
    pub total_answers: Option<u32>,
}

/// The [`CheckAnswersRequest`] is used by [`check_quiz_answers`] to collect
/// the answer payload before the request is issued with `execute()`.
///
/// [`check_quiz_answers`]: crate::dx::client::AcademyClientInstance::check_quiz_answers
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(private))]
pub struct CheckAnswersRequest<T, D> {
    #[builder(setter(custom))]
    pub(super) client: AcademyClientInstance<T, D>,

    #[builder(setter(custom))]
    pub(super) quiz_id: u64,

    /// Answer data keyed by question id; the service grades it server-side
    /// and the client attaches no meaning to the values.
    #[builder(setter(into))]
    pub(super) answers: serde_json::Value,
}

impl<T, D> CheckAnswersRequestBuilder<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Execute the request and return the result.
    ///
    /// This method is asynchronous and will return a future that resolves to
    /// a [`QuizResult`] or [`AcademyError`].
    pub async fn execute(self) -> Result<QuizResult, AcademyError> {
        let request = self
            .build()
            .map_err(|err| AcademyError::ClientInitializationError(err.to_string()))?;

        let payload = json!({
            "id": request.quiz_id,
            "data": request.answers,
        });

        request
            .client
            .resource(QUIZZES_PATH)
            .action("check_answers", payload)
            .await
    }
}

impl<T, D> AcademyClientInstance<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Start a quiz attempt.
    ///
    /// # Example
    /// ```no_run
    /// # use academy::{AcademyClientBuilder, Credentials};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let academy = AcademyClientBuilder::with_reqwest_transport()
    /// #     .with_credentials(Credentials { nonce: Some("a9f4b21c70"), token: None })
    /// #     .build()?;
    /// let session = academy.start_quiz(7).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn start_quiz(&self, quiz_id: u64) -> Result<QuizSession, AcademyError> {
        self.resource(QUIZZES_PATH)
            .action("start_quiz", json!({ "id": quiz_id }))
            .await
    }
}

impl<T, D> AcademyClientInstance<T, D> {
    /// Create a new answer check builder for `quiz_id`.
    ///
    /// Instance of [`CheckAnswersRequestBuilder`] is returned.
    ///
    /// # Example
    /// ```no_run
    /// # use academy::{AcademyClientBuilder, Credentials};
    /// use serde_json::json;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let academy = AcademyClientBuilder::with_reqwest_transport()
    /// #     .with_credentials(Credentials { nonce: Some("a9f4b21c70"), token: None })
    /// #     .build()?;
    /// let result = academy
    ///     .check_quiz_answers(7)
    ///     .answers(json!({"q1": "b", "q2": ["a", "c"]}))
    ///     .execute()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn check_quiz_answers(&self, quiz_id: u64) -> CheckAnswersRequestBuilder<T, D> {
        CheckAnswersRequestBuilder {
            client: Some(self.clone()),
            quiz_id: Some(quiz_id),
            ..Default::default()
        }
    }
}
