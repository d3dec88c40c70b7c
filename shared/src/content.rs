//! Static site content for the Legends Road Rally landing page.
//!
//! All copy lives here as plain data; the frontend only decides how to lay it
//! out. Image paths point into the Moon server's public asset directory.

use crate::model::{DayItinerary, FaqEntry, IncludedItem, TourDate, TourLocation};

pub const SITE_TITLE: &str = "LEGENDS ROAD RALLY";
pub const COMPANY_NAME: &str = "Legends Road LLC";
pub const CONTACT_EMAIL: &str = "info@legends-road.com";
pub const CONTACT_PHONE: &str = "+1-703-624-1947";

pub const PRICE_LABEL: &str = "$1,875";
pub const PRICE_NOTE: &str = "AIRFARE NOT INCLUDED";
pub const MENTOR_PRICE_NOTE: &str =
    "$1,675 for returned missionaries who wish to help out as mentors.";
pub const DEPOSIT_NOTE: &str = "$100 NON-REFUNDABLE DEPOSIT REQUIRED";

pub const HERO_TAGLINE: &str = "10-DAY, 9-NIGHT ADVENTURE THAT WILL CHANGE YOUR LIFE!";
pub const HERO_PITCH: &str = "From Niagara Falls to Sacred Grove, Kirtland Temple, Chicago, \
    Nauvoo, Carthage & Liberty Jail. Discover the stories of early Saints and pioneers as you \
    embark on an unforgettable journey across America with your peers.";

/// Shown when the hero section is constructed with no images at all.
pub const FALLBACK_HERO_IMAGE: &str = "/_api/public/hero/niagara1.jpg";

/// In-page navigation: label plus anchor id.
pub fn nav_links() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Reserve Your Spot Now", "reserve"),
        ("About", "about"),
        ("Next Trip Dates", "trip-dates"),
        ("Buy Swag", "swag"),
        ("FAQ", "faq"),
        ("Contact Us", "contact"),
    ]
}

pub fn hero_images() -> Vec<String> {
    [
        "/_api/public/hero/niagara-falls.jpg",
        "/_api/public/hero/sacred-grove.jpg",
        "/_api/public/hero/group-campfire.jpg",
        "/_api/public/hero/kirtland-temple.jpg",
        "/_api/public/hero/chicago-skyline.jpg",
        "/_api/public/hero/nauvoo-temple.jpg",
        "/_api/public/hero/road-convoy.jpg",
        "/_api/public/hero/carthage-jail.jpg",
        "/_api/public/hero/liberty-jail.jpg",
        "/_api/public/hero/kansas-city-bbq.jpg",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub fn gallery_images() -> Vec<String> {
    [
        "/_api/public/gallery/picture26.png",
        "/_api/public/gallery/picture5.png",
        "/_api/public/gallery/picture22.png",
        "/_api/public/gallery/picture24.png",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub fn about_paragraphs() -> Vec<&'static str> {
    vec![
        "Experience the adventure of a lifetime as you trace the footsteps of pioneers and \
         early Saints across America. This isn't just a road trip — it's a transformative \
         journey that will strengthen your faith, build lasting friendships, and create \
         memories that will last forever.",
        "Each day brings new discoveries, from the natural wonder of Niagara Falls to the \
         sacred sites where our church was restored. Travel with your peers in comfortable \
         vehicles, stay in quality accommodations, and experience America's rich history \
         firsthand.",
        "Led by experienced guides who are passionate about church history and youth \
         ministry, this adventure combines spiritual growth with pure fun and excitement.",
    ]
}

pub fn tour_dates() -> Vec<TourDate> {
    let details = || {
        vec![
            "Ages 14-25".to_owned(),
            "First come - First served".to_owned(),
            "Arrive in Buffalo, NY".to_owned(),
            "Depart from Kansas City".to_owned(),
            "Travel in groups of 21".to_owned(),
        ]
    };
    vec![
        TourDate {
            label: "TOUR 1: JUNE 16-25, 2026".to_owned(),
            details: details(),
        },
        TourDate {
            label: "TOUR 2: JULY 7-16, 2026".to_owned(),
            details: details(),
        },
    ]
}

pub fn included_items() -> Vec<IncludedItem> {
    fn item(icon: &str, title: &str, description: &str) -> IncludedItem {
        IncludedItem {
            icon: icon.to_owned(),
            title: title.to_owned(),
            description: description.to_owned(),
        }
    }
    vec![
        item("🚌", "Transportation", "Comfortable vehicles for the entire journey"),
        item("🏠", "Lodging", "Quality accommodations throughout the trip"),
        item("🍽️", "All Meals & Snacks", "Delicious food to fuel your adventure"),
        item("👥", "Experienced Guides", "Knowledgeable leaders passionate about the journey"),
        item("👕", "T-Shirts", "Commemorative gear to remember your trip"),
        item("🎉", "Plenty of Entertainment", "Fun activities and games throughout"),
    ]
}

pub fn faq_entries() -> Vec<FaqEntry> {
    fn entry(question: &str, answer: &str) -> FaqEntry {
        FaqEntry {
            question: question.to_owned(),
            answer: answer.to_owned(),
        }
    }
    vec![
        entry(
            "What age group can participate?",
            "Our trips are designed for youth ages 14-25 who are members of The Church of \
             Jesus Christ of Latter-day Saints.",
        ),
        entry(
            "How many people are in each group?",
            "Each group consists of 21 participants, ensuring personal attention and \
             meaningful connections throughout the journey.",
        ),
        entry(
            "What is included in the tour price?",
            "The $1,875 price includes transportation, lodging, all meals and snacks, \
             experienced guides, t-shirts, and entertainment. Airfare to Buffalo, NY and \
             from Kansas City is not included.",
        ),
        entry(
            "How do I reserve my spot?",
            "Contact us at info@legends-road.com or call +1-703-624-1947 to secure your \
             place with a $100 non-refundable deposit.",
        ),
        entry(
            "Are there any special opportunities or discounts available?",
            "Discounts available for returned missionaries who are interested in helping as \
             mentors. We have a few spots open for drivers (over the age of 25) if \
             interested.",
        ),
    ]
}

fn location(name: &str, description: &str, activities: &[&str]) -> TourLocation {
    TourLocation {
        name: name.to_owned(),
        description: description.to_owned(),
        activities: activities.iter().map(|a| (*a).to_owned()).collect(),
    }
}

fn day(
    day: u8,
    title: &str,
    description: &str,
    locations: Vec<TourLocation>,
    highlights: &[&str],
    notes: &str,
) -> DayItinerary {
    DayItinerary {
        day,
        title: title.to_owned(),
        description: description.to_owned(),
        locations,
        highlights: highlights.iter().map(|h| (*h).to_owned()).collect(),
        notes: Some(notes.to_owned()),
    }
}

/// The full ten-day itinerary rendered by the schedule accordion.
pub fn tour_schedule() -> Vec<DayItinerary> {
    vec![
        day(
            1,
            "Arrive Buffalo, NY - Niagara Falls",
            "Welcome to the adventure! We'll start our journey at one of the world's most \
             spectacular natural wonders.",
            vec![location(
                "Niagara Falls",
                "Experience the breathtaking power and beauty of Niagara Falls, one of the \
                 world's most famous waterfalls.",
                &[
                    "Maid of the Mist boat tour",
                    "Observation deck viewing",
                    "Group photos at the falls",
                    "Welcome dinner and orientation",
                ],
            )],
            &[
                "First glimpse of the magnificent Niagara Falls",
                "Team building activities",
                "Getting to know your fellow travelers",
            ],
            "Arrive by 2:00 PM for orientation and welcome activities.",
        ),
        day(
            2,
            "Sacred Grove, Hill Cumorah, Grandin Building, Whitmer Farm",
            "Walk in the footsteps of Joseph Smith through the sacred sites where the \
             Restoration began.",
            vec![
                location(
                    "Sacred Grove",
                    "The hallowed grove where Joseph Smith received the First Vision in 1820.",
                    &[
                        "Guided tour through the grove",
                        "Personal reflection time",
                        "Group devotional",
                    ],
                ),
                location(
                    "Hill Cumorah",
                    "The hill where Joseph Smith received the golden plates from the angel \
                     Moroni.",
                    &[
                        "Hill Cumorah Pageant site visit",
                        "Historical presentation",
                        "Group photos",
                    ],
                ),
                location(
                    "Grandin Building",
                    "Where the Book of Mormon was first printed in 1830.",
                    &[
                        "Print shop demonstration",
                        "Historical artifacts viewing",
                        "Book of Mormon printing history",
                    ],
                ),
                location(
                    "Whitmer Farm",
                    "The farm where the Church was officially organized on April 6, 1830.",
                    &[
                        "Church organization site tour",
                        "Historical reenactment",
                        "Group testimony meeting",
                    ],
                ),
            ],
            &[
                "Walk through the Sacred Grove where Joseph Smith saw God the Father and \
                 Jesus Christ",
                "Visit the Hill Cumorah where the golden plates were buried",
                "See where the Book of Mormon was first printed",
                "Stand where the Church was officially organized",
            ],
            "This is a spiritually powerful day. Come prepared for reflection and testimony \
             building.",
        ),
        day(
            3,
            "Harmony, PA - Susquehanna Priesthood Restoration Site",
            "Visit the sacred site where John the Baptist restored the Aaronic Priesthood.",
            vec![location(
                "Susquehanna River",
                "The sacred river where John the Baptist appeared to Joseph Smith and Oliver \
                 Cowdery.",
                &[
                    "Riverbank devotional",
                    "Priesthood restoration reenactment",
                    "Baptismal font demonstration",
                ],
            )],
            &[
                "Stand where John the Baptist appeared",
                "Learn about priesthood restoration",
                "Experience the power of this sacred site",
            ],
            "Bring your scriptures for this powerful priesthood restoration experience.",
        ),
        day(
            4,
            "Kirtland, OH - Whitney Store, Kirtland Temple, Hiram OH: John Johnson Farm",
            "Explore the early Church headquarters and witness the dedication of the first \
             temple.",
            vec![
                location(
                    "Whitney Store",
                    "The Newel K. Whitney Store where Joseph Smith received many revelations.",
                    &[
                        "Store tour and demonstration",
                        "Revelation room visit",
                        "Historical presentation",
                    ],
                ),
                location(
                    "Kirtland Temple",
                    "The first temple built by the Church, dedicated in 1836.",
                    &["Temple exterior tour", "Historical presentation", "Group photos"],
                ),
                location(
                    "John Johnson Farm",
                    "Where Joseph Smith received many revelations and where the Word of \
                     Wisdom was revealed.",
                    &["Farm tour", "Revelation room visit", "Word of Wisdom discussion"],
                ),
            ],
            &[
                "Visit the first temple built by the Church",
                "Walk through the Whitney Store",
                "Experience the John Johnson Farm",
            ],
            "This day focuses on the early Church headquarters and temple building.",
        ),
        day(
            5,
            "Notre Dame University, City of Chicago Sites",
            "Experience the cultural and educational highlights of the Midwest.",
            vec![
                location(
                    "Notre Dame University",
                    "Tour the beautiful campus of one of America's most prestigious Catholic \
                     universities.",
                    &["Campus tour", "Golden Dome visit", "Grotto reflection"],
                ),
                location(
                    "Chicago Sites",
                    "Explore the Windy City's famous landmarks and attractions.",
                    &[
                        "Millennium Park",
                        "Navy Pier",
                        "MLB Game (schedule pending)",
                        "Deep dish pizza dinner",
                    ],
                ),
            ],
            &[
                "Tour Notre Dame's beautiful campus",
                "Experience Chicago's vibrant culture",
                "Possible MLB game attendance",
            ],
            "MLB game schedule will be confirmed closer to the tour date.",
        ),
        day(
            6,
            "Travel to Nauvoo, IL",
            "Journey to the beautiful city of Nauvoo, the City Beautiful.",
            vec![location(
                "Nauvoo, Illinois",
                "The beautiful city on the Mississippi River where the Saints built their \
                 temple.",
                &[
                    "Arrival and orientation",
                    "City overview tour",
                    "Mississippi River walk",
                    "Group dinner",
                ],
            )],
            &[
                "Arrive in historic Nauvoo",
                "First glimpse of the Mississippi River",
                "Orientation to the city",
            ],
            "Travel day with arrival in Nauvoo by evening.",
        ),
        day(
            7,
            "Nauvoo House, Nauvoo Temple, Historic Nauvoo",
            "Immerse yourself in the rich history of Nauvoo's golden era.",
            vec![
                location(
                    "Nauvoo Temple",
                    "The reconstructed temple where early Saints received their endowments.",
                    &["Temple exterior tour", "Historical presentation", "Group photos"],
                ),
                location(
                    "Historic Nauvoo",
                    "Walk through the restored pioneer village and experience 1840s life.",
                    &[
                        "Pioneer village tour",
                        "Blacksmith shop demonstration",
                        "Bakery visit",
                        "Cultural hall activities",
                    ],
                ),
                location(
                    "Nauvoo House",
                    "The hotel built by Joseph Smith to accommodate visitors to Nauvoo.",
                    &[
                        "Historical tour",
                        "Joseph Smith connection",
                        "Architecture appreciation",
                    ],
                ),
            ],
            &[
                "Visit the reconstructed Nauvoo Temple",
                "Experience pioneer life in Historic Nauvoo",
                "Learn about Joseph Smith's vision for the city",
            ],
            "Full day exploring Nauvoo's rich history and culture.",
        ),
        day(
            8,
            "Carthage Jail, Hawn's Mill, Adam-ondi-Ahman, Far West Temple Site",
            "Visit the sites of persecution and the promise of future glory.",
            vec![
                location(
                    "Carthage Jail",
                    "The site where Joseph Smith and Hyrum Smith were martyred.",
                    &["Jail tour", "Martyrdom presentation", "Reflection time"],
                ),
                location(
                    "Hawn's Mill",
                    "Site of the Hawn's Mill Massacre where 17 Saints were killed.",
                    &[
                        "Memorial site visit",
                        "Historical presentation",
                        "Memorial service",
                    ],
                ),
                location(
                    "Adam-ondi-Ahman",
                    "The valley where Adam blessed his posterity and where Christ will \
                     return.",
                    &["Valley tour", "Devotional", "Group photos"],
                ),
                location(
                    "Far West Temple Site",
                    "The cornerstones of the Far West Temple, dedicated but never completed.",
                    &[
                        "Cornerstone viewing",
                        "Historical presentation",
                        "Reflection time",
                    ],
                ),
            ],
            &[
                "Visit Carthage Jail where the Prophet was martyred",
                "Pay respects at Hawn's Mill",
                "Experience the sacred valley of Adam-ondi-Ahman",
                "See the Far West Temple cornerstones",
            ],
            "This is an emotionally powerful day. Come prepared for reflection and \
             reverence.",
        ),
        day(
            9,
            "Kansas City Temple, Independence Visitor Center, Liberty Jail, World's Best \
             Barbeque",
            "Experience the heart of Mormon history in Missouri and enjoy Kansas City's \
             famous cuisine.",
            vec![
                location(
                    "Kansas City Temple",
                    "The beautiful temple serving the Kansas City area.",
                    &["Temple exterior tour", "Grounds walk", "Group photos"],
                ),
                location(
                    "Independence Visitor Center",
                    "Learn about the Church's presence in Independence and the Temple Lot.",
                    &[
                        "Visitor center tour",
                        "Temple Lot viewing",
                        "Historical presentation",
                    ],
                ),
                location(
                    "Liberty Jail",
                    "Where Joseph Smith was imprisoned during the winter of 1838-39.",
                    &["Jail tour", "Revelation presentation", "Reflection time"],
                ),
                location(
                    "Kansas City Barbeque",
                    "Experience the world-famous Kansas City barbeque scene.",
                    &[
                        "Barbeque dinner",
                        "Local cuisine experience",
                        "Group celebration",
                    ],
                ),
            ],
            &[
                "Visit the Kansas City Temple",
                "Learn about Independence and the Temple Lot",
                "Experience Liberty Jail where Joseph received revelations",
                "Enjoy world-famous Kansas City barbeque",
            ],
            "A day of spiritual reflection and culinary celebration.",
        ),
        day(
            10,
            "Closing Ceremonies/Party - Depart Kansas City",
            "Celebrate the journey and say farewell to new friends.",
            vec![location(
                "Kansas City",
                "Final day in Kansas City with closing ceremonies and departure.",
                &[
                    "Closing ceremonies",
                    "Testimony meeting",
                    "Farewell party",
                    "Departure preparations",
                ],
            )],
            &[
                "Share testimonies and experiences",
                "Celebrate new friendships",
                "Reflect on the journey",
                "Say farewell to fellow travelers",
            ],
            "Departure times will be coordinated based on individual travel arrangements.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_has_ten_days_in_order() {
        let schedule = tour_schedule();
        assert_eq!(schedule.len(), 10);
        for (index, day) in schedule.iter().enumerate() {
            assert_eq!(day.day as usize, index + 1);
            assert!(!day.locations.is_empty());
            assert!(!day.highlights.is_empty());
        }
    }

    #[test]
    fn day_eight_has_four_locations_and_a_note() {
        let schedule = tour_schedule();
        let day8 = &schedule[7];
        assert_eq!(day8.day, 8);
        assert_eq!(day8.locations.len(), 4);
        assert!(day8.notes.is_some());
        assert_eq!(day8.locations[0].name, "Carthage Jail");
    }

    #[test]
    fn faq_has_five_entries() {
        let entries = faq_entries();
        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|e| !e.answer.is_empty()));
    }

    #[test]
    fn hero_images_are_non_empty() {
        assert_eq!(hero_images().len(), 10);
        assert!(hero_images().iter().all(|p| p.starts_with("/_api/public/")));
    }

    #[test]
    fn two_tour_dates_with_matching_details() {
        let dates = tour_dates();
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].details, dates[1].details);
    }

    #[test]
    fn nav_links_cover_all_anchors() {
        let anchors: Vec<&str> = nav_links().iter().map(|(_, anchor)| *anchor).collect();
        for expected in ["about", "trip-dates", "faq", "contact", "reserve", "swag"] {
            assert!(anchors.contains(&expected), "missing anchor: {expected}");
        }
    }

    #[test]
    fn itinerary_round_trips_through_serde() {
        let schedule = tour_schedule();
        let json = serde_json::to_string(&schedule).unwrap();
        let back: Vec<crate::model::DayItinerary> = serde_json::from_str(&json).unwrap();
        assert_eq!(schedule, back);
    }
}
