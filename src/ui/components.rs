//! Presentational building blocks for the landing page

use serde::Serialize;

/// Icon shown next to a feature title, served from `/static/icons/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Notifications,
    HeartCircle,
    Eye,
}

impl Icon {
    /// File name under the embedded `icons/` directory
    pub fn file_name(self) -> &'static str {
        match self {
            Icon::Notifications => "notifications.svg",
            Icon::HeartCircle => "heart-circle.svg",
            Icon::Eye => "eye.svg",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureItem {
    pub icon: Icon,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

impl FeatureItem {
    const fn new(
        icon: Icon,
        title: &'static str,
        subtitle: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            icon,
            title,
            subtitle,
            description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Call-to-action shown in the hero
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToAction {
    pub href: String,
    pub label: &'static str,
}

impl CallToAction {
    pub const LABEL: &'static str = "Jom! Subscribe to NakVaksin for FREE!";

    /// Signed-in visitors go straight to their dashboard
    pub fn for_visitor(signed_in: bool, dashboard_path: &str, login_path: &str) -> Self {
        let href = if signed_in { dashboard_path } else { login_path };
        Self {
            href: href.to_string(),
            label: Self::LABEL,
        }
    }
}

pub fn features() -> Vec<FeatureItem> {
    vec![
        FeatureItem::new(
            Icon::Notifications,
            "Guaranteed notification",
            "Don't worry, we are not as forgetful",
            "We promise that you will receive an SMS and email from us if your vaccination appointment is ready or even changed.",
        ),
        FeatureItem::new(
            Icon::HeartCircle,
            "Care for your loved one",
            "Get up to speed with your family member's vaccine appointment updates",
            "Keep an eye out for your grandparents, parents and even childrens when their appointment is set up.",
        ),
        FeatureItem::new(
            Icon::Eye,
            "Monitor your employees vaccination updates",
            "Stop asking \"Check your MySejahtera\"",
            "You can subscribe to their vaccination updates and get the latest updates directly from us!",
        ),
    ]
}

pub fn faqs() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "What is NakVaksin?",
            answer: "NakVaksin checks your MySejahtera vaccination appointment for you and tells you the moment it is ready or changed.",
        },
        FaqEntry {
            question: "Is it really free?",
            answer: "Yes. Subscribing and receiving SMS and email notifications costs nothing.",
        },
        FaqEntry {
            question: "Do you keep my MySejahtera password?",
            answer: "No. Your password is only used to sign in to MySejahtera and is never stored by us.",
        },
        FaqEntry {
            question: "Can I follow more than one person?",
            answer: "Boleh! Subscribe to your family members or employees and get their appointment updates as well.",
        },
        FaqEntry {
            question: "How do I stop the notifications?",
            answer: "Unsubscribe any time from your dashboard and we will stop sending updates immediately.",
        },
    ]
}
