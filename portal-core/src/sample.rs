//! Sample data sets substituted when the content API is unreachable.
//!
//! These mirror what the school actually publishes (plausible events, files
//! and albums) so a degraded portal still looks sensible. They are only ever
//! served with [`DataSource::Sample`](crate::fetch::DataSource) attached;
//! rendering them as live content is a bug.

use chrono::NaiveDate;

use crate::event::{CalendarEvent, EventType};
use crate::fetch::Section;
use crate::files::{DownloadFile, FileCategory, FileType};
use crate::gallery::{Photo, PhotoAlbum};

pub const ALBUMS_UNAVAILABLE: &str = "Unable to load photo albums. Please try again later.";
pub const EVENTS_UNAVAILABLE: &str = "Unable to load calendar events. Please try again later.";
pub const FILES_UNAVAILABLE: &str = "Unable to load download files. Please try again later.";
pub const CATEGORIES_UNAVAILABLE: &str = "Unable to load file categories. Please try again later.";

/// Pre-wired section state machine for the gallery
pub fn albums_section() -> Section<PhotoAlbum> {
    Section::new(ALBUMS_UNAVAILABLE, albums())
}

/// Pre-wired section for calendar events, keyed by `(year, month)`
pub fn events_section() -> Section<CalendarEvent, (i32, u32)> {
    Section::new(EVENTS_UNAVAILABLE, events())
}

pub fn files_section() -> Section<DownloadFile> {
    Section::new(FILES_UNAVAILABLE, files())
}

pub fn categories_section() -> Section<FileCategory> {
    Section::new(CATEGORIES_UNAVAILABLE, categories())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn events() -> Vec<CalendarEvent> {
    vec![
        CalendarEvent {
            id: "1".into(),
            title: "Parent-Teacher Conferences".into(),
            description: Some("Individual meetings with teachers to discuss student progress".into()),
            date: date(2024, 12, 20),
            start_time: "9:00 AM".into(),
            end_time: Some("5:00 PM".into()),
            location: Some("Main Building".into()),
            event_type: EventType::Meeting,
            attendees: Some(vec!["Parents".into(), "Teachers".into()]),
        },
        CalendarEvent {
            id: "2".into(),
            title: "Winter Festival".into(),
            description: Some("Annual winter celebration with performances and crafts".into()),
            date: date(2024, 12, 22),
            start_time: "6:00 PM".into(),
            end_time: Some("8:00 PM".into()),
            location: Some("School Auditorium".into()),
            event_type: EventType::Festival,
            attendees: Some(vec!["All Families".into()]),
        },
        CalendarEvent {
            id: "3".into(),
            title: "Winter Break".into(),
            description: Some("School closed for winter holidays".into()),
            date: date(2024, 12, 23),
            start_time: "All Day".into(),
            end_time: None,
            location: None,
            event_type: EventType::Holiday,
            attendees: None,
        },
        CalendarEvent {
            id: "4".into(),
            title: "New Year's Day".into(),
            description: Some("School closed for New Year's Day".into()),
            date: date(2025, 1, 1),
            start_time: "All Day".into(),
            end_time: None,
            location: None,
            event_type: EventType::Holiday,
            attendees: None,
        },
        CalendarEvent {
            id: "5".into(),
            title: "Classes Resume".into(),
            description: Some("First day back from winter break".into()),
            date: date(2025, 1, 6),
            start_time: "8:00 AM".into(),
            end_time: None,
            location: Some("All Classrooms".into()),
            event_type: EventType::Academic,
            attendees: None,
        },
        CalendarEvent {
            id: "6".into(),
            title: "Grade 8 Graduation Planning".into(),
            description: Some("Meeting to plan eighth grade graduation ceremony".into()),
            date: date(2025, 1, 15),
            start_time: "7:00 PM".into(),
            end_time: Some("8:30 PM".into()),
            location: Some("Conference Room".into()),
            event_type: EventType::Meeting,
            attendees: Some(vec!["Grade 8 Parents".into(), "Teachers".into()]),
        },
    ]
}

pub fn categories() -> Vec<FileCategory> {
    let category = |id: &str, name: &str, description: &str, file_count| FileCategory {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        file_count,
    };
    vec![
        category("handbook", "Handbooks", "School handbooks and policies", 5),
        category("forms", "Forms", "Permission slips and forms", 8),
        category("newsletters", "Newsletters", "Monthly newsletters", 12),
        category("photos", "Photos", "Event photos", 25),
        category("videos", "Videos", "School videos", 6),
        category("resources", "Resources", "Educational resources", 15),
    ]
}

pub fn files() -> Vec<DownloadFile> {
    vec![
        DownloadFile {
            id: "1".into(),
            name: "Parent Handbook 2024-2025".into(),
            description: Some(
                "Complete guide for parents including policies, procedures, and important information".into(),
            ),
            file_type: FileType::Pdf,
            size: "2.4 MB".into(),
            upload_date: date(2024, 8, 15),
            category: "handbook".into(),
            url: "/placeholder.pdf".into(),
            preview_url: None,
            download_count: Some(156),
        },
        DownloadFile {
            id: "2".into(),
            name: "Field Trip Permission Form".into(),
            description: Some("Required form for all field trip participation".into()),
            file_type: FileType::Pdf,
            size: "245 KB".into(),
            upload_date: date(2024, 9, 1),
            category: "forms".into(),
            url: "/placeholder.pdf".into(),
            preview_url: None,
            download_count: Some(89),
        },
        DownloadFile {
            id: "3".into(),
            name: "October Newsletter".into(),
            description: Some("Monthly newsletter with updates and upcoming events".into()),
            file_type: FileType::Pdf,
            size: "1.8 MB".into(),
            upload_date: date(2024, 10, 1),
            category: "newsletters".into(),
            url: "/placeholder.pdf".into(),
            preview_url: None,
            download_count: Some(234),
        },
        DownloadFile {
            id: "4".into(),
            name: "Spring Festival Photos".into(),
            description: Some("Collection of photos from the 2024 Spring Festival celebration".into()),
            file_type: FileType::Archive,
            size: "45.2 MB".into(),
            upload_date: date(2024, 3, 20),
            category: "photos".into(),
            url: "/placeholder.zip".into(),
            preview_url: None,
            download_count: Some(67),
        },
        DownloadFile {
            id: "5".into(),
            name: "Grade 5 Play Recording".into(),
            description: Some("Video recording of the Grade 5 class play performance".into()),
            file_type: FileType::Video,
            size: "125 MB".into(),
            upload_date: date(2024, 5, 15),
            category: "videos".into(),
            url: "/placeholder.mp4".into(),
            preview_url: Some("/placeholder.mp4".into()),
            download_count: Some(45),
        },
        DownloadFile {
            id: "6".into(),
            name: "Waldorf Education Guide".into(),
            description: Some("Introduction to Waldorf education philosophy and methods".into()),
            file_type: FileType::Pdf,
            size: "3.1 MB".into(),
            upload_date: date(2024, 7, 10),
            category: "resources".into(),
            url: "/placeholder.pdf".into(),
            preview_url: None,
            download_count: Some(123),
        },
        DownloadFile {
            id: "7".into(),
            name: "Emergency Contact Form".into(),
            description: Some("Updated emergency contact information form".into()),
            file_type: FileType::Document,
            size: "156 KB".into(),
            upload_date: date(2024, 8, 25),
            category: "forms".into(),
            url: "/placeholder.docx".into(),
            preview_url: None,
            download_count: Some(78),
        },
        DownloadFile {
            id: "8".into(),
            name: "School Calendar 2024-2025".into(),
            description: Some("Complete academic year calendar with all important dates".into()),
            file_type: FileType::Pdf,
            size: "892 KB".into(),
            upload_date: date(2024, 8, 1),
            category: "handbook".into(),
            url: "/placeholder.pdf".into(),
            preview_url: None,
            download_count: Some(201),
        },
    ]
}

pub fn albums() -> Vec<PhotoAlbum> {
    vec![
        PhotoAlbum {
            id: "1".into(),
            title: "Spring Festival 2024".into(),
            date: "March 15, 2024".into(),
            cover_photo: "/albums/spring-festival-cover.jpg".into(),
            photo_count: 24,
            photos: vec![],
        },
        PhotoAlbum {
            id: "2".into(),
            title: "Harvest Celebration".into(),
            date: "October 8, 2024".into(),
            cover_photo: "/albums/harvest-celebration-cover.jpg".into(),
            photo_count: 18,
            photos: vec![],
        },
        PhotoAlbum {
            id: "3".into(),
            title: "Winter Concert".into(),
            date: "December 12, 2024".into(),
            cover_photo: "/albums/winter-concert-cover.jpg".into(),
            photo_count: 32,
            photos: vec![],
        },
    ]
}

/// Photos for one sample album, empty for unknown ids
pub fn album_photos(album_id: &str) -> Vec<Photo> {
    let photo = |id: &str, slug: &str, title: &str, date: &str, event: &str, description: &str| Photo {
        id: id.into(),
        url: format!("/photos/{slug}.jpg"),
        thumbnail: format!("/photos/{slug}-thumb.jpg"),
        title: title.into(),
        date: date.into(),
        event: event.into(),
        description: Some(description.into()),
    };

    match album_id {
        "1" => vec![
            photo(
                "1-1",
                "spring-festival-dance",
                "Spring Dance Performance",
                "March 15, 2024",
                "Spring Festival",
                "Children performing traditional spring dances",
            ),
            photo(
                "1-2",
                "spring-festival-maypole",
                "Maypole Celebration",
                "March 15, 2024",
                "Spring Festival",
                "Traditional maypole dancing celebration",
            ),
        ],
        "2" => vec![photo(
            "2-1",
            "harvest-pumpkins",
            "Pumpkin Display",
            "October 8, 2024",
            "Harvest Celebration",
            "Beautiful harvest display created by students",
        )],
        "3" => vec![photo(
            "3-1",
            "winter-concert-choir",
            "School Choir Performance",
            "December 12, 2024",
            "Winter Concert",
            "Annual winter concert featuring all grade levels",
        )],
        _ => vec![],
    }
}
