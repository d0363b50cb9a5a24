// src/models/mod.rs
pub mod extraction;
pub mod record;

pub use extraction::{ExtractedProfile, ExtractionResult, ExtractionStatus};
pub use record::{normalize_specializations, BusinessRecord, CaseStudy, FeatureFlags, SocialLinks, TeamMember, Testimonial};
