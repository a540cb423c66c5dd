use yew::prelude::*;
use yew_router::prelude::*;

use crate::logout;
use crate::session::use_session;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MainLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

/// Header and navigation around the protected views. Access is checked by
/// `PrivateRoute` before this renders.
#[function_component(MainLayout)]
pub fn main_layout(props: &MainLayoutProps) -> Html {
    let session = use_session();
    let profile = session.profile();

    let who = profile
        .as_ref()
        .map(|p| format!("{} · {}", p.username, p.role.label()))
        .unwrap_or_default();

    let home = profile.as_ref().map(|p| Route::landing(p.role));

    html! {
        <>
            <header class="header">
                <div class="header-title">{"Gestion des formations"}</div>
                <div class="header-user">{ who }</div>
                <div class="header-logout">
                    <logout::Logout />
                </div>
            </header>

            <nav class="nav">
                <ul class="nav-list">
                    {
                        match home {
                            Some(route) => html!(<li class="nav-item"><Link<Route> to={route}>{"Tableau de bord"}</Link<Route>></li>),
                            None => Html::default(),
                        }
                    }
                </ul>
            </nav>

            <main class="main-content">
                { for props.children.iter() }
            </main>
        </>
    }
}
