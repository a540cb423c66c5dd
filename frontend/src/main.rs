use session_core::{Role, RouteRequirement};
use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod auth;
mod config;
mod dashboard;
mod guard;
mod layout;
mod logout;
mod session;
mod utils;

use guard::{PrivateRoute, Replace};

/* -------------------- routing -------------------- */

#[derive(Routable, Clone, Debug, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/unauthorized")]
    Unauthorized,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[at("/formateur/dashboard")]
    FormateurDashboard,
    #[at("/assistant/dashboard")]
    AssistantDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Where a role lands after login.
    pub fn landing(role: Role) -> Route {
        Route::recognize(role.landing_path()).unwrap_or(Route::Root)
    }
}

fn protected(role: Role) -> Html {
    html! {
        <PrivateRoute allowed={RouteRequirement::only(role)}>
            <layout::MainLayout><dashboard::Dashboard {role} /></layout::MainLayout>
        </PrivateRoute>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html!(<auth::LoginForm />),
        Route::Register => html!(<auth::RegisterForm />),
        Route::Unauthorized => html! {
            <div class="unauthorized">
                <h1>{"403 – accès refusé"}</h1>
                <p>{"Votre rôle ne permet pas d'afficher cette page."}</p>
                <Link<Route> to={Route::Login}>{"Retour à la connexion"}</Link<Route>>
            </div>
        },
        Route::AdminDashboard => protected(Role::Admin),
        Route::FormateurDashboard => protected(Role::Formateur),
        Route::AssistantDashboard => protected(Role::Assistant),
        Route::Root | Route::NotFound => html!(<Replace to={Route::Login} />),
    }
}

/* -------------------- entry point ---------------- */

#[function_component(App)]
fn app() -> Html {
    html! {
        <session::SessionProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </session::SessionProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_roles_land_on_their_dashboard() {
        assert_eq!(Route::landing(Role::Admin), Route::AdminDashboard);
        assert_eq!(Route::landing(Role::Formateur), Route::FormateurDashboard);
        assert_eq!(Route::landing(Role::Assistant), Route::AssistantDashboard);
        assert_eq!(Route::landing(Role::Participant), Route::Root);
    }

    #[test]
    fn guard_redirects_match_routes() {
        use session_core::Access;
        assert_eq!(Route::recognize(Access::Login.redirect_path().unwrap()), Some(Route::Login));
        assert_eq!(
            Route::recognize(Access::Unauthorized.redirect_path().unwrap()),
            Some(Route::Unauthorized)
        );
    }
}
