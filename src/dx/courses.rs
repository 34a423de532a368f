//! Courses module.
//!
//! Typed access to the `courses` collection: the catalog listing with its
//! filters, single-course reads, and the trash / restore cycle used by the
//! account area.

use std::collections::HashMap;

use derive_builder::Builder;

use crate::{
    core::{AcademyError, Deserializer, Transport},
    dx::client::AcademyClientInstance,
};

pub(crate) const COURSES_PATH: &str = "courses";

/// One course, as the service reports it.
///
/// Fields outside `id` and `title` are optional on the wire; which ones are
/// present depends on the route and on whether the caller is enrolled.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Course {
    /// Course identifier.
    pub id: u64,

    /// Course title.
    pub title: String,

    #[serde(default)]
    pub slug: Option<String>,

    /// Publication status (`publish`, `draft`, `trash`, …).
    #[serde(default)]
    pub status: Option<String>,

    /// Cover image URL.
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub price: Option<f64>,

    #[serde(default)]
    pub sale_price: Option<f64>,

    /// Average rating, 0.0 – 5.0.
    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub categories: Vec<String>,

    /// Completion percentage for the current user, when enrolled.
    #[serde(default)]
    pub progress: Option<u8>,

    /// Total course duration in milliseconds.
    ///
    /// Render it with [`humanize_duration`].
    ///
    /// [`humanize_duration`]: crate::core::utils::time::humanize_duration
    #[serde(default)]
    pub duration: Option<u64>,
}

/// One page of the course catalog.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct CoursesPage {
    /// Courses on this page.
    pub posts: Vec<Course>,

    /// Total number of courses matching the filters.
    #[serde(default)]
    pub total: u64,

    /// Total number of pages.
    #[serde(default)]
    pub pages: u64,
}

/// The [`ListCoursesRequest`] is used by [`list_courses`] to collect the
/// catalog filters before the request is issued with `execute()`.
///
/// # Examples
/// ```no_run
/// # use academy::{AcademyClientBuilder, Credentials};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let academy = AcademyClientBuilder::with_reqwest_transport()
/// #     .with_credentials(Credentials { nonce: Some("a9f4b21c70"), token: None })
/// #     .build()?;
/// let page = academy
///     .list_courses()
///     .search("rust")
///     .page(2)
///     .execute()
///     .await?;
/// # Ok(())
/// # }
/// ```
///
/// [`list_courses`]: crate::dx::client::AcademyClientInstance::list_courses
#[derive(Builder)]
#[builder(pattern = "owned", build_fn(private))]
pub struct ListCoursesRequest<T, D> {
    #[builder(setter(custom))]
    pub(super) client: AcademyClientInstance<T, D>,

    /// Restrict results to one category slug.
    #[builder(setter(strip_option, into), default = "None")]
    pub(super) category: Option<String>,

    /// Full-text search query.
    #[builder(setter(strip_option, into), default = "None")]
    pub(super) search: Option<String>,

    /// Page number, 1-based.
    #[builder(setter(strip_option), default = "None")]
    pub(super) page: Option<u32>,

    /// Page size.
    #[builder(setter(strip_option), default = "None")]
    pub(super) per_page: Option<u32>,

    /// Only courses the current user is enrolled in.
    #[builder(default = "false")]
    pub(super) enrolled: bool,
}

impl<T, D> ListCoursesRequest<T, D> {
    fn query_params(&self) -> HashMap<String, String> {
        let mut query: HashMap<String, String> = HashMap::new();

        if let Some(category) = &self.category {
            query.insert("category".to_string(), category.clone());
        }

        if let Some(search) = &self.search {
            query.insert("search".to_string(), search.clone());
        }

        if let Some(page) = self.page {
            query.insert("paged".to_string(), page.to_string());
        }

        if let Some(per_page) = self.per_page {
            query.insert("per_page".to_string(), per_page.to_string());
        }

        if self.enrolled {
            query.insert("enrolled".to_string(), "1".to_string());
        }

        query
    }
}

impl<T, D> ListCoursesRequestBuilder<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Execute the request and return the result.
    ///
    /// This method is asynchronous and will return a future that resolves to
    /// a [`CoursesPage`] or [`AcademyError`].
    pub async fn execute(self) -> Result<CoursesPage, AcademyError> {
        let request = self
            .build()
            .map_err(|err| AcademyError::ClientInitializationError(err.to_string()))?;

        let query = request.query_params();
        request.client.resource(COURSES_PATH).list(query).await
    }
}

impl<T, D> AcademyClientInstance<T, D> {
    /// Create a new course listing builder.
    ///
    /// Instance of [`ListCoursesRequestBuilder`] is returned.
    ///
    /// # Example
    /// ```no_run
    /// # use academy::{AcademyClientBuilder, Credentials};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let academy = AcademyClientBuilder::with_reqwest_transport()
    /// #     .with_credentials(Credentials { nonce: Some("a9f4b21c70"), token: None })
    /// #     .build()?;
    /// let enrolled = academy.list_courses().enrolled(true).execute().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_courses(&self) -> ListCoursesRequestBuilder<T, D> {
        ListCoursesRequestBuilder {
            client: Some(self.clone()),
            ..Default::default()
        }
    }
}

impl<T, D> AcademyClientInstance<T, D>
where
    T: Transport,
    D: Deserializer,
{
    /// Fetch one course by id.
    pub async fn course(&self, id: u64) -> Result<Course, AcademyError> {
        self.resource(COURSES_PATH).get(id).await
    }

    /// Move a course to the trash.
    ///
    /// The service soft-deletes; [`restore_course`] reverses it.
    ///
    /// [`restore_course`]: AcademyClientInstance::restore_course
    pub async fn delete_course(&self, id: u64) -> Result<Course, AcademyError> {
        self.resource(COURSES_PATH).delete(id, HashMap::new()).await
    }

    /// Bring a trashed course back.
    pub async fn restore_course(&self, id: u64) -> Result<Course, AcademyError> {
        self.resource(COURSES_PATH).restore(id).await
    }
}
