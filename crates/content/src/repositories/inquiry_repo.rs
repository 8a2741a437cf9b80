//! Writes to the `inquiries` collection.

use msru_core::models::InquiryForm;
use msru_directus::ContentApi;

use crate::error::ContentError;
use crate::schema::INQUIRIES;

/// Submits contact-form inquiries.
pub struct InquiryRepo;

impl InquiryRepo {
    /// Store one inquiry. `true` only when the service accepted it.
    pub async fn submit_inquiry(api: &dyn ContentApi, form: &InquiryForm) -> bool {
        match Self::try_submit(api, form).await {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "Failed to submit inquiry");
                false
            }
        }
    }

    /// Validate and store one inquiry. An invalid form is rejected before
    /// any request is made.
    pub async fn try_submit(api: &dyn ContentApi, form: &InquiryForm) -> Result<(), ContentError> {
        form.check()?;

        let payload = serde_json::to_value(form)?;
        api.create_item(INQUIRIES, &payload).await?;

        tracing::info!(inquiry_type = ?form.inquiry_type, "Inquiry submitted");
        Ok(())
    }
}
