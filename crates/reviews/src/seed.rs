//! Demo reviews the product page starts with.

use chrono::NaiveDate;

use crate::review::{MediaRef, Review};

fn review(author: &str, (y, m, d): (i32, u32, u32), rating: u8, content: &str, media: &[&str]) -> Review {
    Review {
        author: author.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        rating,
        content: content.to_string(),
        media: media.iter().map(|m| MediaRef::from_path(*m)).collect(),
    }
}

/// Five mock reviews, newest first.
pub fn mock_reviews() -> Vec<Review> {
    vec![
        review(
            "Ivan Ivanov",
            (2024, 4, 12),
            5,
            "Excellent palette! The colours are rich and last a long time.",
            &[],
        ),
        review(
            "Maria Petrova",
            (2024, 3, 28),
            4,
            "Good quality, but a little pricey.",
            &["images/img2.jpg"],
        ),
        review(
            "Anna Smirnova",
            (2024, 2, 15),
            5,
            "Wonderful product! Easy to apply and looks beautiful.",
            &["images/img3.jpg"],
        ),
        review(
            "Sergey Kuznetsov",
            (2024, 1, 10),
            3,
            "It's fine, but I expected more.",
            &[],
        ),
        review(
            "Elena Vasilyeva",
            (2023, 12, 5),
            4,
            "Nice colours, the packaging could be better.",
            &[],
        ),
    ]
}
