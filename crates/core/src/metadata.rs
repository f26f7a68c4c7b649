//! Per-photo captions and details shown in the gallery modal.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageMetadata {
    pub caption: &'static str,
    pub date: &'static str,
    pub weather: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

/// Keyed by blob file name, matched exactly (extension case included).
const IMAGE_METADATA: &[(&str, ImageMetadata)] = &[
    ("IMG_0329.jpg", ImageMetadata {
        caption: "What you watchin'?",
        date: "January 16, 2023",
        weather: "Partly Cloudy, 22°C",
        location: "Home",
        description: "Taking a million selfies here.",
    }),
    ("IMG_0396.jpg", ImageMetadata {
        caption: "Handshake",
        date: "January 18, 2023",
        weather: "Cold, -10°C",
        location: "Home",
        description: "Anya's using Caramel to complete her science summative.",
    }),
    ("IMG_0538.jpg", ImageMetadata {
        caption: "Hehe I'm pretty",
        date: "January 31, 2023",
        weather: "Cold, -15°C",
        location: "Home",
        description: "Caramel is pretty and she knows it.",
    }),
    ("IMG_2388.jpg", ImageMetadata {
        caption: "Happy Caramel at WOSS",
        date: "June 13, 2025",
        weather: "Warm, 22°C",
        location: "WOSS North Campus",
        description: "Adventure day at WOSS! Caramel is excited to explore new areas.",
    }),
    ("IMG_2410.jpg", ImageMetadata {
        caption: "Watchin' humans at WOSS",
        date: "June 13, 2025",
        weather: "Warm, 22°C",
        location: "WOSS South Campus, in front of the library",
        description: "Caramel loves watching people and barking at them :D",
    }),
    ("IMG_2419.jpg", ImageMetadata {
        caption: "Haha I just barked at Mr.VR",
        date: "June 13, 2025",
        weather: "Warm, 22°C",
        location: "WOSS North Campus, in front of Portable 1",
        description: "HAHA! Caramel hates Math!",
    }),
    ("IMG_2618.jpg", ImageMetadata {
        caption: "I look so mature as an UOttawa alumni",
        date: "June 21, 2025",
        weather: "Hot, 25°C",
        location: "Home",
        description: "Caramel in her distinguished University of Ottawa alumni scarf.",
    }),
    ("IMG_2899.JPG", ImageMetadata {
        caption: "I'm so mature",
        date: "April 30, 2022",
        weather: "Cool, 18°C",
        location: "Evan's Office",
        description: "The one time she's photogenic....Or the first time the photo was taken correctly.",
    }),
    ("IMG_4208.jpg", ImageMetadata {
        caption: "I'm a deer",
        date: "July 17, 2022",
        weather: "Warm, 25°C",
        location: "Backyard",
        description: "Caramel's ears are finally up like a deer.",
    }),
    ("IMG_5141.jpg", ImageMetadata {
        caption: "Skunk ToT",
        date: "September 21, 2025",
        weather: "Warm, 20°C",
        location: "Home",
        description: "The day Caramel encountered a skunk... that's why you shouldn't chase after a skunk!",
    }),
    ("IMG_7896.JPG", ImageMetadata {
        caption: "Hehe fwend",
        date: "October 11, 2024",
        weather: "Sunny, 19°C",
        location: "Home",
        description: "Got forced to make a new friend.",
    }),
    ("IMG_7952.JPG", ImageMetadata {
        caption: "Chipmunks",
        date: "October 19, 2022",
        weather: "Clear, 17°C",
        location: "Evan's Office",
        description: "Caramel is hunting the chipmunk as usual.",
    }),
    ("IMG_8614.jpg", ImageMetadata {
        caption: ":/",
        date: "October 26, 2022",
        weather: "Cloudy, 16°C",
        location: "Evan's Office",
        description: "Hehe",
    }),
    ("IMG_9981.jpg", ImageMetadata {
        caption: "I'm handsome",
        date: "April 6, 2025",
        weather: "Sunny, 15°C",
        location: "Home",
        description: "Caramel stole a bow tie from a cake.",
    }),
];

/// Metadata for a blob file name, if the photo has been captioned.
#[must_use]
pub fn lookup_metadata(file_name: &str) -> Option<&'static ImageMetadata> {
    IMAGE_METADATA.iter().find(|(name, _)| *name == file_name).map(|(_, meta)| meta)
}

/// Every captioned file name, in table order.
pub fn captioned_files() -> impl Iterator<Item = &'static str> {
    IMAGE_METADATA.iter().map(|(name, _)| *name)
}

/// Last `/`-separated segment of an image URL.
#[must_use]
pub fn file_name_from_url(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
