use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::list_view::Listable;

/// The full page payload embedded by the server at navigation time.
///
/// Every section is optional or defaults to empty so that any page can
/// render from a partial payload; missing sections surface as empty
/// states, never as a crash.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PagePayload {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub bootcamps: Vec<Bootcamp>,
    #[serde(default)]
    pub webinars: Vec<Webinar>,
    #[serde(default)]
    pub mentors: Vec<Mentor>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub promotion: Option<Promotion>,
    #[serde(default)]
    pub checkout: Option<CheckoutSummary>,
    #[serde(default)]
    pub dashboard: Option<DashboardStats>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Course {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub category: String,
    /// Price in whole rupiah.
    pub price: u64,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub summary: String,
    /// Raw URL as entered by the author; may not be a resolvable
    /// YouTube link yet.
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub lessons: Vec<Lesson>,
    #[serde(default)]
    pub average_rating: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub duration_minutes: u32,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Bootcamp {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub price: u64,
    pub starts_on: NaiveDate,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Webinar {
    pub id: u32,
    pub title: String,
    pub price: u64,
    pub date: NaiveDate,
    /// Local wall-clock times as supplied by the server, e.g. "19:00".
    pub starts_at: String,
    #[serde(default)]
    pub ends_at: Option<String>,
    #[serde(default)]
    pub host: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Mentor {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Review {
    pub author: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub body: String,
    /// 1..=5.
    pub stars: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GalleryItem {
    pub image: String,
    #[serde(default)]
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Invoice {
    pub number: String,
    /// Status key as supplied by the server: "pending", "paid", "expired".
    pub status: String,
    pub total: u64,
    pub created_at: NaiveDate,
    #[serde(default)]
    pub items: Vec<EnrollmentItem>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EnrollmentItem {
    pub title: String,
    /// Product kind: "course", "bootcamp", "webinar".
    pub kind: String,
    pub price: u64,
    #[serde(default)]
    pub progress_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Promotion {
    pub id: String,
    pub title: String,
    pub image: String,
    /// Destination when the popup image is clicked.
    pub url: String,
    pub is_active: bool,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    /// Hours to keep the popup hidden after a dismissal. Defaults to 24.
    #[serde(default)]
    pub suppress_hours: Option<i64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckoutSummary {
    pub invoice_number: String,
    pub grand_total: u64,
    pub payment_method: String,
    #[serde(default)]
    pub items: Vec<EnrollmentItem>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardStats {
    pub revenue: u64,
    pub student_count: u32,
    pub course_count: u32,
    pub invoice_count: u32,
    #[serde(default)]
    pub recent_invoices: Vec<Invoice>,
}

impl Listable for Course {
    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl Listable for Bootcamp {
    fn title(&self) -> &str {
        &self.title
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

impl Listable for Webinar {
    fn title(&self) -> &str {
        &self.title
    }
}

impl Listable for Invoice {
    fn title(&self) -> &str {
        &self.number
    }

    fn category(&self) -> Option<&str> {
        Some(&self.status)
    }
}
