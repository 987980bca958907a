//! Link creation: validation, unique-code generation, record insertion.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{CreatedLink, NewLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::{generate_unique_code, validate_custom_alias};
use crate::utils::url_normalizer::normalize_url;

/// Service for creating shortened links.
///
/// Normalizes the destination, validates or generates the code, and
/// reserves it in the store. Codes are stored lowercase; lookups are
/// case-insensitive throughout the core.
pub struct LinkService<S: LinkStore> {
    store: Arc<S>,
}

impl<S: LinkStore> LinkService<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Creates a short link, returning the assigned code and record id.
    ///
    /// With a custom alias the alias is validated, lowercased, and checked
    /// for availability. Without one, a generated code is used: memorable
    /// consonant/vowel candidates first, random draws later, with the
    /// timestamp fallback guaranteeing termination.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] for an invalid URL or alias
    /// - [`AppError::Conflict`] when the alias is already taken
    /// - [`AppError::Internal`] when the store fails; unlike the redirect
    ///   path, creation-time store errors always propagate
    pub async fn create_short_link(
        &self,
        long_url: &str,
        custom_alias: Option<String>,
        owner_id: Option<String>,
    ) -> Result<CreatedLink, AppError> {
        let normalized_url = normalize_url(long_url).map_err(|e| {
            AppError::bad_request("Invalid URL", json!({ "reason": e.to_string() }))
        })?;

        let (code, is_custom_alias) = match custom_alias {
            Some(alias) => {
                validate_custom_alias(&alias)?;
                let code = alias.to_ascii_lowercase();

                if !self.store.is_available(&code).await? {
                    return Err(AppError::conflict(
                        "This alias is already taken",
                        json!({ "alias": code }),
                    ));
                }

                (code, true)
            }
            None => {
                let store = Arc::clone(&self.store);
                let code = generate_unique_code(
                    move |candidate| {
                        let store = Arc::clone(&store);
                        async move { store.is_available(&candidate).await }
                    },
                    true,
                )
                .await?;

                (code, false)
            }
        };

        let record_id = self
            .store
            .insert_record(NewLink {
                code: code.clone(),
                long_url: normalized_url.clone(),
                is_custom_alias,
                owner_id,
            })
            .await?;

        tracing::info!(record_id, code = %code, "short link created");

        Ok(CreatedLink {
            record_id,
            code,
            long_url: normalized_url,
        })
    }
}
