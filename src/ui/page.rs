//! Landing page assembly and rendering

use axum::http::HeaderMap;
use chrono::Datelike;
use minijinja::Environment;
use serde::Serialize;

use crate::config::{MalformedSessionPolicy, SiteConfig};
use crate::error::{Error, Result};
use crate::hydration::{dehydrate, seed_from_session, DehydratedState};
use crate::session::{read_session, UserProfile};

use super::assets::template_environment;
use super::components::{faqs, features, CallToAction, FaqEntry, FeatureItem};

const HOME_TEMPLATE: &str = "home.html";

/// Everything the home template needs for one request
#[derive(Debug, Clone, Serialize)]
pub struct LandingPage {
    pub site_name: String,
    pub signed_in: bool,
    pub user_name: Option<String>,
    pub is_homepage: bool,
    pub cta: CallToAction,
    pub dashboard_path: String,
    pub logout_path: String,
    pub github_url: String,
    pub features: Vec<FeatureItem>,
    pub faqs: Vec<FaqEntry>,
    pub year: i32,
    /// Script-safe JSON of `state`
    pub dehydrated_state: String,
    #[serde(skip)]
    pub state: DehydratedState,
}

impl LandingPage {
    pub fn new(site: &SiteConfig, session: Option<&UserProfile>) -> Result<Self> {
        let state = dehydrate(&seed_from_session(session));
        let signed_in = session.is_some_and(UserProfile::is_signed_in);

        Ok(Self {
            site_name: site.name.clone(),
            signed_in,
            user_name: session.and_then(UserProfile::name).map(str::to_string),
            is_homepage: true,
            cta: CallToAction::for_visitor(signed_in, &site.dashboard_path, &site.login_path),
            dashboard_path: site.dashboard_path.clone(),
            logout_path: site.logout_path.clone(),
            github_url: site.github_url.clone(),
            features: features(),
            faqs: faqs(),
            year: chrono::Utc::now().year(),
            dehydrated_state: state.to_script_json()?,
            state,
        })
    }
}

/// Compiled templates plus the site settings they render with
pub struct Site {
    env: Environment<'static>,
    config: SiteConfig,
}

impl Site {
    pub fn new(config: SiteConfig) -> Result<Self> {
        let env = template_environment()?;
        // Fail at startup rather than on the first request
        env.get_template(HOME_TEMPLATE)?;
        Ok(Self { env, config })
    }

    /// Session for this request, with the malformed-cookie policy applied
    pub fn session(&self, headers: &HeaderMap) -> Result<Option<UserProfile>> {
        match read_session(headers, &self.config.session_cookie) {
            Err(err @ Error::MalformedSession { .. })
                if self.config.malformed_session == MalformedSessionPolicy::SignedOut =>
            {
                tracing::warn!(error = %err, "Ignoring malformed session cookie");
                Ok(None)
            }
            other => other,
        }
    }

    pub fn landing_page(&self, session: Option<&UserProfile>) -> Result<LandingPage> {
        LandingPage::new(&self.config, session)
    }

    pub fn render_home(&self, page: &LandingPage) -> Result<String> {
        let template = self.env.get_template(HOME_TEMPLATE)?;
        Ok(template.render(page)?)
    }

    /// Render the landing page for an incoming request
    pub fn home(&self, headers: &HeaderMap) -> Result<String> {
        let session = self.session(headers)?;
        tracing::debug!(
            signed_in = session.as_ref().is_some_and(UserProfile::is_signed_in),
            "Rendering landing page"
        );

        let page = self.landing_page(session.as_ref())?;
        self.render_home(&page)
    }
}
