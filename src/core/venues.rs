//! The itinerary content: thirteen Manchester venues in visiting order.
//!
//! The table is a `static` slice: built at compile time, never mutated.
//! A venue's position in the slice is always `id - 1`.

use thiserror::Error;

/// A venue table that breaks its authoring-time guarantees.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VenueTableError {
    #[error("{name} has id {id} at position {position}")]
    IdOutOfOrder {
        name: &'static str,
        id: u32,
        position: usize,
    },
    #[error("{name} has a relative link {url}")]
    RelativeLink { name: &'static str, url: &'static str },
    #[error("venue {0} is missing text")]
    MissingText(u32),
}

/// Where a venue's picture comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRef {
    /// Absolute URL of a hosted photo.
    Remote(&'static str),
    /// File name of a bundled asset.
    Asset(&'static str),
}

impl ImageRef {
    /// Short label for the card's image line.
    pub fn label(self) -> &'static str {
        match self {
            ImageRef::Remote(url) => url,
            ImageRef::Asset(name) => name,
        }
    }
}

/// One stop on the crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VenueRecord {
    /// 1-based, unique, equal to position + 1.
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub link_url: &'static str,
    pub image_url: &'static str,
    pub image_asset: &'static str,
    pub highlighted_feature: Option<&'static str>,
}

impl VenueRecord {
    /// Picks the remote photo or the bundled asset.
    pub fn image_ref(&self, local_images: bool) -> ImageRef {
        if local_images {
            ImageRef::Asset(self.image_asset)
        } else {
            ImageRef::Remote(self.image_url)
        }
    }
}

pub const TITLE: &str = "Manchester Pub Crawl";
pub const SUBTITLE: &str = "Scroll to explore";

pub const INTRO: &str = "Embark on an adventure through Manchester's most iconic pubs and bars. \
From historic watering holes to hidden speakeasies, this curated journey \
showcases the city's diverse drinking culture.";

pub const FOOTER_TITLE: &str = "Journey Complete!";
pub const FOOTER_TEXT: &str = "Congratulations on exploring Manchester's legendary pub crawl! \
Remember to drink responsibly and always plan a safe way home.";

pub static MANCHESTER_PUB_CRAWL: &[VenueRecord] = &[
    VenueRecord {
        id: 1,
        name: "The Wharf",
        description: "Start your journey at this picturesque canalside pub with stunning views of Castlefield Basin. Enjoy a traditional British ale in this Grade II listed building.",
        link_url: "https://www.tripadvisor.co.uk/Restaurant_Review-g187069-d3327134-Reviews-The_Wharf-Manchester_Greater_Manchester_England.html",
        image_url: "https://media-cdn.tripadvisor.com/media/photo-s/0f/64/e9/0d/the-wharf-castlefield.jpg",
        image_asset: "wharf.jpeg",
        highlighted_feature: Some("Gorgeous waterside seating with historic bridge views"),
    },
    VenueRecord {
        id: 2,
        name: "Bunny Jackson's",
        description: "Step into this American-style dive bar for live music, cheap beer, and the city's most famous chicken wings. A lively atmosphere that channels New Orleans vibes.",
        link_url: "https://bunnysdivebars.co.uk/bunnyjacksons/",
        image_url: "https://bunnysdivebars.co.uk/wp-content/uploads/sites/4/2023/09/Gallery-1-1.jpg",
        image_asset: "bunny_jacksons.jpeg",
        highlighted_feature: Some("10p chicken wings and nightly live music"),
    },
    VenueRecord {
        id: 3,
        name: "The Refuge",
        description: "Located in the stunning Principal Hotel, this grand Victorian space offers craft cocktails and small plates in one of Manchester's most impressive interiors.",
        link_url: "https://www.refugemcr.co.uk/",
        image_url: "https://www.refugemcr.co.uk/wp-content/uploads/2020/03/TheRefuge_Jan19ByJamesMoore-10-1600x1066.jpg",
        image_asset: "refuge.jpg",
        highlighted_feature: Some("Stunning Victorian architecture with lush interior garden"),
    },
    VenueRecord {
        id: 4,
        name: "Rain Bar",
        description: "A three-storey converted Victorian warehouse beside the Rochdale canal, offering real ales and hearty pub food with a riverside terrace.",
        link_url: "https://www.rain-bar.co.uk/",
        image_url: "https://media-cdn.tripadvisor.com/media/photo-s/16/9b/e0/8e/rain-bar.jpg",
        image_asset: "rain_bar.jpeg",
        highlighted_feature: Some("Beautiful canal-side terrace perfect for sunny days"),
    },
    VenueRecord {
        id: 5,
        name: "The Temple",
        description: "Originally a Victorian public toilet, this tiny underground bar is now a Manchester institution. Small but mighty, with great music and character.",
        link_url: "https://www.tripadvisor.co.uk/Attraction_Review-g187069-d7717068-Reviews-The_Temple-Manchester_Greater_Manchester_England.html",
        image_url: "https://media-cdn.tripadvisor.com/media/photo-s/08/a2/cf/e7/the-temple.jpg",
        image_asset: "temple.jpeg",
        highlighted_feature: Some("Former underground Victorian toilet with legendary jukebox"),
    },
    VenueRecord {
        id: 6,
        name: "Speak in Code",
        description: "A hidden speakeasy cocktail bar with no signage, serving creative mixology in an intimate setting. Look for the unmarked door and the right code to enter.",
        link_url: "https://speakincodebar.com/",
        image_url: "https://speakincodebar.com/wp-content/uploads/2022/02/Drinksmadeforinstagram-scaled.jpeg",
        image_asset: "speak_in_code.jpg",
        highlighted_feature: Some("Hidden entrance and prohibition-era atmosphere"),
    },
    VenueRecord {
        id: 7,
        name: "Salt Dog Slim's",
        description: "Liverpool's famous bar brings its steins, shots and hot dogs to Manchester. A raucous party spot with plenty of character and salt-rimmed cocktails.",
        link_url: "https://www.saltdogslims.com/cocktail-bar-manchester/",
        image_url: "https://www.saltdogslims.com/wp-content/uploads/2021/11/IMG_0182-min-1024x682.jpg",
        image_asset: "salt_dog_slims.jpg",
        highlighted_feature: Some("Dollar bills on the ceiling and steins of German beer"),
    },
    VenueRecord {
        id: 8,
        name: "Sinclair's Oyster Bar",
        description: "Historic pub dating back to 1720, serving some of the cheapest pints in Manchester. Sits alongside the Old Wellington in a picturesque cobbled square.",
        link_url: "https://www.tripadvisor.co.uk/Restaurant_Review-g187069-d858226-Reviews-Sinclair_s_Oyster_Bar-Manchester_Greater_Manchester_England.html",
        image_url: "https://media-cdn.tripadvisor.com/media/photo-s/02/df/72/e8/sinclair-s-oyster-bar.jpg",
        image_asset: "sinclairs.jpeg",
        highlighted_feature: Some("One of Manchester's oldest pubs with Tudor-style architecture"),
    },
    VenueRecord {
        id: 9,
        name: "The Washhouse",
        description: "Disguised as a launderette, this secret bar requires you to 'book a wash' by phone to gain entry. Creative cocktails served in a dimly lit, exclusive setting.",
        link_url: "https://www.washhousemcr.com/",
        image_url: "https://images.squarespace-cdn.com/content/v1/5e8cd725fb8d8b3a8051aa1b/4c4c13bc-9bc8-43f4-98a8-8a9f7ce8ecee/bar2.jpg",
        image_asset: "washhouse.jpeg",
        highlighted_feature: Some("Disguised as a launderette with a hidden entrance"),
    },
    VenueRecord {
        id: 10,
        name: "Ramona",
        description: "Detroit-style pizza and margaritas in a transformed former MOT garage. Indoor and outdoor spaces with fire pits, creating a unique industrial-chic vibe.",
        link_url: "https://www.takemetoramona.com/",
        image_url: "https://images.squarespace-cdn.com/content/v1/5ffe8e75b79c4e3a58c16747/1619694366079-2I9YNCZCB9CIG4KGAQTY/DSC00047.jpg",
        image_asset: "ramona.jpeg",
        highlighted_feature: Some("Converted MOT garage with tipi bar and wood-fired pizza"),
    },
    VenueRecord {
        id: 11,
        name: "Lost Cat",
        description: "A quirky Northern Quarter bar with retro vibes, arcade games, and excellent cocktails. Look for the neon cat sign to find this hidden gem.",
        link_url: "https://lostcatnq.co.uk/",
        image_url: "https://lostcatnq.co.uk/wp-content/uploads/2022/09/Lost-Cat-03_09_2022-118-2-1-scaled.jpg",
        image_asset: "lost_cat.jpeg",
        highlighted_feature: Some("Vintage arcade games and neon-lit atmosphere"),
    },
    VenueRecord {
        id: 12,
        name: "Crazy Pedro's",
        description: "Late-night pizza parlor and mezcal bar with eclectic décor and a party atmosphere. Famous for unusual pizza toppings and frozen margaritas.",
        link_url: "https://crazypedros.co.uk/crazy-pedros-pizza-parlour-nq/",
        image_url: "https://crazypedros.co.uk/wp-content/uploads/2020/03/crazy-pedros-NQ-MCR.jpg",
        image_asset: "crazy_pedros.jpeg",
        highlighted_feature: Some("Open until 4am with quirky pizza toppings"),
    },
    VenueRecord {
        id: 13,
        name: "Behind Closed Doors",
        description: "A hidden basement bar with 70s décor, rotary phones at each table to order drinks, and risqué artwork. Knock to enter this adults-only establishment.",
        link_url: "https://www.bcdnq.com/manchester/",
        image_url: "https://media-cdn.tripadvisor.com/media/photo-s/17/d2/a9/b2/main-bar.jpg",
        image_asset: "behind_closed_doors.jpeg",
        highlighted_feature: Some("Retro phones to order drinks and vintage adult magazines as decor"),
    },
];

/// Checks the authoring-time guarantees of a venue table: ids run
/// `1..=len` in order and every link is an absolute http(s) URI.
pub fn validate(table: &[VenueRecord]) -> Result<(), VenueTableError> {
    for (position, venue) in table.iter().enumerate() {
        if venue.id as usize != position + 1 {
            return Err(VenueTableError::IdOutOfOrder {
                name: venue.name,
                id: venue.id,
                position,
            });
        }
        if !(venue.link_url.starts_with("https://") || venue.link_url.starts_with("http://")) {
            return Err(VenueTableError::RelativeLink {
                name: venue.name,
                url: venue.link_url,
            });
        }
        if venue.name.is_empty() || venue.description.is_empty() {
            return Err(VenueTableError::MissingText(venue.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_thirteen_valid_stops() {
        assert_eq!(MANCHESTER_PUB_CRAWL.len(), 13);
        assert_eq!(validate(MANCHESTER_PUB_CRAWL), Ok(()));
    }

    #[test]
    fn every_stop_has_a_highlight() {
        assert!(MANCHESTER_PUB_CRAWL.iter().all(|v| v.highlighted_feature.is_some()));
    }

    #[test]
    fn validate_rejects_out_of_order_ids() {
        let mut table = MANCHESTER_PUB_CRAWL[..2].to_vec();
        table.swap(0, 1);
        assert_eq!(
            validate(&table),
            Err(VenueTableError::IdOutOfOrder {
                name: "Bunny Jackson's",
                id: 2,
                position: 0,
            })
        );
    }

    #[test]
    fn validate_rejects_relative_links() {
        let mut table = MANCHESTER_PUB_CRAWL[..1].to_vec();
        table[0].link_url = "/the-wharf";
        let err = validate(&table).unwrap_err();
        assert_eq!(err.to_string(), "The Wharf has a relative link /the-wharf");
    }

    #[test]
    fn image_ref_switches_source() {
        let wharf = &MANCHESTER_PUB_CRAWL[0];
        assert_eq!(wharf.image_ref(true), ImageRef::Asset("wharf.jpeg"));
        assert!(matches!(wharf.image_ref(false), ImageRef::Remote(url) if url.starts_with("https://")));
    }
}
