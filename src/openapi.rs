use utoipa::OpenApi;

pub(crate) const HEALTH_TAG: &str = "Health API";
pub(crate) const DRINKS_TAG: &str = "Drinks API";

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = DRINKS_TAG, description = "Drink catalog endpoints"),
    ),
    paths(
        crate::api::health::health_check,
        crate::api::drinks::list::list_drinks_handler,
        crate::api::drinks::detail::drink_details_handler,
        crate::api::drinks::create::create_drink_handler,
        crate::api::drinks::update::update_drink_handler,
        crate::api::drinks::delete::delete_drink_handler,
    ),
    info(
        title = "Drinks API",
        description = "Drink catalog service behind role-scoped JWT authorization",
        version = "0.1.0"
    )
)]
pub(crate) struct ApiDoc;
