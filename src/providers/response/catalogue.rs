//! Catálogo de respuestas enlatadas del asistente de chat.
use serde::{Deserialize, Serialize};

pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI tax assistant. I can help you with tax questions, deductions, filing \
                                   requirements, and more. What would you like to know?";

pub const QUICK_SUGGESTIONS: [&str; 6] = ["Tax deadlines 2024",
                                          "Standard deduction",
                                          "Business expenses",
                                          "Investment tax savings",
                                          "Tax form preparation",
                                          "Connect with tax expert"];

/// Icono de un enlace. Conjunto cerrado; etiquetas desconocidas caen en
/// `External`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkIcon {
    Book,
    Calculator,
    File,
    Chart,
    Gavel,
    User,
    External,
    Pdf,
}

impl LinkIcon {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "book" => LinkIcon::Book,
            "calculator" => LinkIcon::Calculator,
            "file" => LinkIcon::File,
            "chart" => LinkIcon::Chart,
            "gavel" => LinkIcon::Gavel,
            "user" => LinkIcon::User,
            "pdf" => LinkIcon::Pdf,
            _ => LinkIcon::External,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseLink {
    pub text: String,
    pub url: String,
    pub icon: LinkIcon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedResponse {
    pub message: String,
    pub links: Vec<ResponseLink>,
}

type Row = (&'static str, &'static [(&'static str, &'static str, &'static str)]);

const RESPONSES: [Row; 8] = [
    ("I'd be happy to help with that! Tax laws can be complex, but I'll break it down for you.",
     &[("IRS Tax Guide", "#", "book"),
      ("Tax Calculator", "#", "calculator")]),
    ("Based on current tax regulations, here's what you need to know:",
     &[("Official IRS Publication", "#", "file"),
      ("Tax Planning Resources", "#", "chart")]),
    ("That's an excellent question! Let me provide you with the most up-to-date information:",
     &[("Tax Code Reference", "#", "gavel"),
      ("Professional Consultation", "#", "user")]),
    ("Great question! For home office deductions, you have two main options:\n\n**1. Simplified Method:** Deduct $5 per square foot (up to 300 sq ft, max $1,500)\n\n**2. Actual Expense Method:** Calculate percentage of home used for business",
     &[("IRS Publication 587 - Business Use of Home", "#", "external"),
      ("Home Office Deduction Calculator", "#", "calculator")]),
    ("Yes! For 2024, business meal deductions are generally 50% of the cost, but there are some important exceptions:\n\n**100% Deductible:**\n• Office snacks and meals for employees\n• Company picnics and holiday parties\n• Meals during business travel\n\n**50% Deductible:**\n• Client entertainment meals\n• Business meetings at restaurants\n• Networking event meals",
     &[("Business Meal Expense Tracker Template", "#", "file"),
      ("IRS Guidelines for Business Meals", "#", "external")]),
    ("Smart investing can significantly reduce your tax burden! For 2024:\n\n**401(k) Contributions:** Up to $23,000 (pre-tax)\n**IRA Contributions:** Up to $7,000 (traditional = tax deductible)\n**HSA Contributions:** Up to $4,300 (triple tax advantage)\n\nBased on your income, you could potentially save thousands in taxes through strategic investing. Would you like personalized investment advice?",
     &[("Get Investment Tax Advice", "/investment-advisor", "chart"),
      ("IRS Publication 590 - IRAs", "#", "external")]),
    ("Filing your taxes doesn't have to be overwhelming! I can help you prepare your tax forms step-by-step:\n\n**What you'll need:**\n• W-2 forms from employers\n• 1099 forms for interest/dividends\n• Receipts for deductions\n• Previous year's tax return\n\n**Our Tax Form Wizard** guides you through each section and maps your documents to the correct form sections. Ready to get started?",
     &[("Start Tax Form Wizard", "/tax-form-wizard", "file"),
      ("Tax Document Checklist", "#", "external")]),
    ("Need personalized assistance with complex tax situations? Connect with our certified tax professionals and attorneys for expert guidance:\n\n**Available Services:**\n• Hourly consultations for specific questions\n• Full-service tax preparation and filing\n• Expert review of complex situations\n• IRS correspondence assistance\n\n**Our Experts:**\n• Certified Public Accountants (CPAs)\n• Enrolled Agents (EAs)\n• Licensed Tax Attorneys\n\nChoose between phone, video, or in-person consultations. Ready to get professional help?",
     &[("Connect with Tax Expert", "/human-agent", "user"),
      ("Learn About Our Experts", "#", "external")]),
];

/// Respuestas disponibles, en orden fijo.
pub fn canned_responses() -> Vec<CannedResponse> {
    RESPONSES.iter()
             .map(|(message, links)| CannedResponse { message: message.to_string(),
                                                      links: links.iter()
                                                                  .map(|(text, url, icon)| ResponseLink { text: text.to_string(),
                                                                                                          url: url.to_string(),
                                                                                                          icon: LinkIcon::from_tag(icon) })
                                                                  .collect() })
             .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_icon_tags_fall_back_to_external() {
        assert_eq!(LinkIcon::from_tag("gavel"), LinkIcon::Gavel);
        assert_eq!(LinkIcon::from_tag("bus"), LinkIcon::External);
        assert_eq!(LinkIcon::from_tag(""), LinkIcon::External);
    }

    #[test]
    fn catalogue_links_point_to_the_wizards() {
        let urls: Vec<String> = canned_responses().into_iter().flat_map(|r| r.links).map(|l| l.url).collect();
        assert!(urls.contains(&"/tax-form-wizard".to_string()));
        assert!(urls.contains(&"/investment-advisor".to_string()));
        assert!(urls.contains(&"/human-agent".to_string()));
    }
}
