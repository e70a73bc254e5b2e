use crate::routes::{auth, follow, publication, root, user};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        root::handlers::root,
        root::handlers::health_check,
        // Auth handlers
        auth::handlers::register,
        auth::handlers::login,
        // User handlers
        user::handlers::profile,
        user::handlers::list_first_page,
        user::handlers::list,
        user::handlers::update,
        user::handlers::upload_avatar,
        user::handlers::avatar,
        user::handlers::own_counters,
        user::handlers::counters,
        // Follow handlers
        follow::handlers::follow,
        follow::handlers::unfollow,
        follow::handlers::following,
        follow::handlers::followers,
        // Publication handlers
        publication::handlers::create,
        publication::handlers::detail,
        publication::handlers::remove,
        publication::handlers::user_page,
    ),
    components(
        schemas(
        ),
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "User", description = "Profiles, listings, avatars and counters"),
        (name = "Follow", description = "Follow relations between users"),
        (name = "Publication", description = "User publications"),
        (name = "System", description = "Health check"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
