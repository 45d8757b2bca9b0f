use crate::app_context::AppContext;
use crate::personal_best::responses::PersonalBestResponse;
use crate::storage::games::HashMapGameStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn personal_best(
    State(app_context): State<AppContext<HashMapGameStorage>>,
) -> Json<PersonalBestResponse> {
    Json(PersonalBestResponse {
        error: false,
        personal_best: app_context.personal_best.get().await,
    })
}
