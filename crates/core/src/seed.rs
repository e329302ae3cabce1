//! The fixed event set written to an empty store on first access.

use crate::event::{Event, EventStatus};
use crate::types::Date;

struct SeedEvent {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    date: (i32, u32, u32),
    club_name: &'static str,
    expected_audience: u64,
    sponsorship_goal: u64,
    sponsorship_raised: u64,
    benefits: &'static str,
    status: EventStatus,
    created_at: (i32, u32, u32),
}

const SEED_EVENTS: [SeedEvent; 4] = [
    SeedEvent {
        id: "1",
        name: "TechFest 2024",
        description: "Annual technology festival featuring hackathons, workshops, and tech talks from industry leaders.",
        date: (2024, 3, 15),
        club_name: "Computer Science Society",
        expected_audience: 500,
        sponsorship_goal: 5000,
        sponsorship_raised: 3200,
        benefits: "Logo on banners, Stage mention, Booth space, Social media promotion",
        status: EventStatus::Approved,
        created_at: (2024, 1, 10),
    },
    SeedEvent {
        id: "2",
        name: "Cultural Night",
        description: "A celebration of diversity with performances, food stalls, and art exhibitions.",
        date: (2024, 4, 20),
        club_name: "International Students Association",
        expected_audience: 800,
        sponsorship_goal: 8000,
        sponsorship_raised: 4500,
        benefits: "Naming rights, VIP seating, Product sampling, Brand activation zone",
        status: EventStatus::Approved,
        created_at: (2024, 1, 15),
    },
    SeedEvent {
        id: "3",
        name: "Startup Summit",
        description: "Connect with aspiring entrepreneurs, pitch competitions, and networking sessions.",
        date: (2024, 5, 10),
        club_name: "Entrepreneurship Club",
        expected_audience: 300,
        sponsorship_goal: 10000,
        sponsorship_raised: 2000,
        benefits: "Keynote speaking slot, Judging panel seat, Exclusive networking dinner",
        status: EventStatus::Pending,
        created_at: (2024, 1, 20),
    },
    SeedEvent {
        id: "4",
        name: "Sports Carnival",
        description: "Inter-college sports competition with various athletic events.",
        date: (2024, 6, 5),
        club_name: "Athletics Club",
        expected_audience: 1200,
        sponsorship_goal: 15000,
        sponsorship_raised: 0,
        benefits: "Jersey branding, Stadium banners, Award ceremony presence, Live stream ads",
        status: EventStatus::Pending,
        created_at: (2024, 1, 25),
    },
];

fn ymd((y, m, d): (i32, u32, u32)) -> Date {
    // Seed dates are literals above and always valid.
    Date::from_ymd_opt(y, m, d).unwrap_or(Date::MIN)
}

/// The four example events, in insertion order.
pub fn seed_events() -> Vec<Event> {
    SEED_EVENTS
        .iter()
        .map(|s| Event {
            id: s.id.to_string(),
            name: s.name.to_string(),
            description: s.description.to_string(),
            date: ymd(s.date),
            club_name: s.club_name.to_string(),
            expected_audience: s.expected_audience,
            sponsorship_goal: s.sponsorship_goal,
            sponsorship_raised: s.sponsorship_raised,
            benefits: s.benefits.to_string(),
            status: s.status,
            created_at: ymd(s.created_at),
        })
        .collect()
}
