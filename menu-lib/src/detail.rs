//! Dish-detail view model
//!
//! Holds everything the dish-detail screen shows: the dish, a working copy
//! that collects new comments, the prev/next neighbours, the last error
//! message and the comment form. Rendering is left to the caller.
//!
//! # Example
//!
//! ```ignore
//! use menu_lib::detail::DishDetail;
//!
//! let mut detail = DishDetail::new();
//! detail.load(&client, &"0".into()).await?;
//!
//! detail.comment_form_mut().set_value("author", "Jo");
//! detail.comment_form_mut().set_value("comment", "Lovely");
//! detail.submit(&client).await?;
//! ```

use chrono::SecondsFormat;
use chrono::Utc;
use log::debug;
use log::warn;

use crate::api::ItemSource;
use crate::error::Error;
use crate::error::NavigationError;
use crate::error::handle_error;
use crate::form::FieldSpec;
use crate::form::Form;
use crate::form::ValidationResult;
use crate::model::Comment;
use crate::model::Dish;
use crate::model::ItemId;
use crate::model::MAX_RATING;
use crate::model::MIN_RATING;
use crate::navigator::IdSequence;
use crate::navigator::Neighbors;

/// Comment form field names.
pub mod fields {
    pub const COMMENT: &str = "comment";
    pub const AUTHOR: &str = "author";
    pub const RATING: &str = "rating";
}

pub const COMMENT_REQUIRED: &str = "The comment is required.";
pub const AUTHOR_REQUIRED: &str = "Author is required.";
pub const AUTHOR_MIN_LENGTH: &str = "Author must be at least 2 characters long.";

/// Builds the dish comment form: a required comment, an author of at least
/// two characters and a rating defaulting to 5.
pub fn comment_form() -> Form {
    Form::new(vec![
        FieldSpec::new(fields::COMMENT).required(COMMENT_REQUIRED),
        FieldSpec::new(fields::AUTHOR)
            .required(AUTHOR_REQUIRED)
            .min_length(2, AUTHOR_MIN_LENGTH),
        FieldSpec::new(fields::RATING).initial(MAX_RATING.to_string()),
    ])
}

/// State behind the dish-detail screen.
#[derive(Debug)]
pub struct DishDetail {
    ids: Option<IdSequence>,
    dish: Option<Dish>,
    dish_copy: Option<Dish>,
    neighbors: Option<Neighbors>,
    error_message: Option<String>,
    comment_form: Form,
}

impl DishDetail {
    /// Creates an empty view with a fresh comment form.
    pub fn new() -> Self {
        Self {
            ids: None,
            dish: None,
            dish_copy: None,
            neighbors: None,
            error_message: None,
            comment_form: comment_form(),
        }
    }

    /// Loads the dish ids and the dish `id`, then computes its neighbours.
    ///
    /// Fetch failures are not returned; they replace [`error_message`]
    /// instead. Later calls overwrite whatever earlier calls stored.
    ///
    /// # Errors
    ///
    /// Returns a [`NavigationError`] if the loaded dish is not part of the
    /// loaded id list.
    ///
    /// [`error_message`]: Self::error_message
    pub async fn load<S>(&mut self, source: &S, id: &ItemId) -> Result<(), NavigationError>
    where
        S: ItemSource<Dish> + ?Sized,
    {
        debug!("Loading dish {}", id);

        let ids = match source.ids().await {
            Ok(ids) => ids,
            Err(e) => {
                self.fail(&e);
                return Ok(());
            }
        };
        self.ids = Some(ids);

        let dish = match source.item(id).await {
            Ok(dish) => dish,
            Err(e) => {
                self.fail(&e);
                return Ok(());
            }
        };

        self.show(dish)
    }

    /// Submits the comment form as a new comment on the loaded dish.
    ///
    /// The comment is appended to the working copy, which is sent to the
    /// backend. On success the stored dish replaces both the dish and the
    /// working copy; on failure both are cleared and the message is kept in
    /// [`error_message`]. The form is reset either way.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidForm`] if the form fails validation; nothing is sent.
    /// - [`Error::InvalidOperation`] if no dish is loaded.
    ///
    /// [`error_message`]: Self::error_message
    pub async fn submit<S>(&mut self, source: &S) -> Result<Comment, Error>
    where
        S: ItemSource<Dish> + ?Sized,
    {
        if let ValidationResult::Invalid(errors) = self.comment_form.validate_all() {
            return Err(Error::InvalidForm(errors));
        }

        let mut copy = self
            .dish_copy
            .take()
            .ok_or_else(|| Error::InvalidOperation("no dish loaded".to_string()))?;

        let comment = self.comment();
        copy.comments.push(comment.clone());
        debug!("Submitting comment by {} on dish {}", comment.author, copy.id);

        match source.put_item(&copy).await {
            Ok(dish) => {
                self.dish_copy = Some(dish.clone());
                self.dish = Some(dish);
                self.error_message = None;
            }
            Err(e) => {
                self.dish = None;
                self.dish_copy = None;
                self.fail(&e);
            }
        }

        self.comment_form.reset();
        Ok(comment)
    }

    /// Builds a comment from the current form values, stamped now.
    pub fn comment(&self) -> Comment {
        let form = &self.comment_form;
        Comment {
            rating: parse_rating(form.value(fields::RATING)),
            comment: form.value(fields::COMMENT).to_string(),
            author: form.value(fields::AUTHOR).to_string(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn ids(&self) -> Option<&IdSequence> {
        self.ids.as_ref()
    }

    pub fn dish(&self) -> Option<&Dish> {
        self.dish.as_ref()
    }

    /// The copy new comments are added to before saving.
    pub fn dish_copy(&self) -> Option<&Dish> {
        self.dish_copy.as_ref()
    }

    pub fn neighbors(&self) -> Option<&Neighbors> {
        self.neighbors.as_ref()
    }

    /// The last fetch or submit failure, ready to display.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn comment_form(&self) -> &Form {
        &self.comment_form
    }

    pub fn comment_form_mut(&mut self) -> &mut Form {
        &mut self.comment_form
    }

    fn show(&mut self, dish: Dish) -> Result<(), NavigationError> {
        let ids = self.ids.as_ref().ok_or(NavigationError::EmptySequence)?;
        self.neighbors = Some(ids.neighbors(&dish.id)?);
        self.dish_copy = Some(dish.clone());
        self.dish = Some(dish);
        self.error_message = None;
        Ok(())
    }

    fn fail(&mut self, err: &Error) {
        let message = handle_error(err);
        warn!("Dish detail request failed: {}", message);
        self.error_message = Some(message);
    }
}

impl Default for DishDetail {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a form rating, clamped to the allowed range. Unparseable input
/// falls back to the maximum.
fn parse_rating(value: &str) -> u8 {
    value
        .trim()
        .parse::<u8>()
        .map(|r| r.clamp(MIN_RATING, MAX_RATING))
        .unwrap_or(MAX_RATING)
}
