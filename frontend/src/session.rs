use std::rc::Rc;

use gloo::events::EventListener;
use serde_json::Value;
use session_core::{
    Access, AuthError, Profile, Registration, Role, RouteRequirement, SessionContext,
    SessionService,
};
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;
use yew::prelude::*;

use crate::api::HttpTransport;
use crate::utils::{session_store, BrowserStorage};

pub type AppContext = SessionContext<BrowserStorage, HttpTransport>;

/* ---------------- compteur de révisions ------------------ */
// chaque changement de session incrémente le compteur, ce qui
// fait re-rendre les consommateurs du contexte
#[derive(Default, PartialEq)]
struct Revision(u32);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(Revision(self.0.wrapping_add(1)))
    }
}

/* ---------------- poignée exposée aux composants ---------- */
#[derive(Clone)]
pub struct SessionHandle {
    context: Rc<AppContext>,
    revision: u32,
    bump: UseReducerDispatcher<Revision>,
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.context, &other.context) && self.revision == other.revision
    }
}

impl SessionHandle {
    pub fn is_authenticated(&self) -> bool {
        self.context.is_authenticated()
    }

    pub fn role(&self) -> Option<Role> {
        self.context.role()
    }

    pub fn profile(&self) -> Option<Profile> {
        self.context.profile()
    }

    pub fn check(&self, requirement: &RouteRequirement) -> Access {
        self.context.check(requirement)
    }

    pub async fn login(&self, identifier: &str, secret: &str) -> Result<Profile, AuthError> {
        let result = self.context.login(identifier, secret).await;
        if result.is_ok() {
            self.bump.dispatch(());
        }
        result
    }

    pub fn logout(&self) {
        self.context.logout();
        self.bump.dispatch(());
    }

    pub async fn register(&self, registration: &Registration) -> Result<Value, AuthError> {
        self.context.register(registration).await
    }
}

/* ---------------- hook pratique -------------------- */
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("SessionProvider manquant")
}

/* -------------- props du provider ----------------- */
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/* -------------- provider global ------------------- */
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    // lu une seule fois, au premier rendu
    let context = use_memo((), |_| {
        SessionContext::new(SessionService::new(session_store(), HttpTransport))
    });
    let revision = use_reducer(Revision::default);

    /* ---- autre onglet : événement "storage" sur la clé de session ---- */
    {
        let context = context.clone();
        let bump = revision.dispatcher();
        use_effect_with((), move |_| {
            let key = context.service().store().key().to_string();
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "storage", move |event| {
                    let Some(event) = event.dyn_ref::<StorageEvent>() else {
                        return;
                    };
                    // key() == None : localStorage.clear() dans l'autre onglet
                    let ours = event.key().map_or(true, |k| k == key);
                    if ours && context.reload() {
                        log::info!("session modifiée dans un autre onglet");
                        bump.dispatch(());
                    }
                })
            });
            move || drop(listener)
        });
    }

    let handle = SessionHandle {
        context,
        revision: revision.0,
        bump: revision.dispatcher(),
    };

    html! {
        <ContextProvider<SessionHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<SessionHandle>>
    }
}
