#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum City {
    Nairobi,
    Mombasa,
    Nakuru,
    Eldoret,
    Kisumu,
}

impl City {
    /// Cities in the order they are reported.
    pub const ALL: [City; 5] = [
        City::Nairobi,
        City::Mombasa,
        City::Nakuru,
        City::Eldoret,
        City::Kisumu,
    ];
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            City::Nairobi => "Nairobi",
            City::Mombasa => "Mombasa",
            City::Nakuru => "Nakuru",
            City::Eldoret => "Eldoret",
            City::Kisumu => "Kisumu",
        };
        write!(f, "{name}")
    }
}

/// A named place and its coordinates. Only used as a reference for place
/// names; the generated records never carry coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Location {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
    pub city: City,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.4}, {:.4})",
            self.name, self.latitude, self.longitude
        )
    }
}

const fn location(name: &'static str, latitude: f64, longitude: f64, city: City) -> Location {
    Location {
        name,
        latitude,
        longitude,
        city,
    }
}

pub static KENYAN_LOCATIONS: [Location; 22] = [
    location("Nairobi CBD", -1.2864, 36.8172, City::Nairobi),
    location("Westlands", -1.2676, 36.8070, City::Nairobi),
    location("Karen", -1.3197, 36.7074, City::Nairobi),
    location("Ngong", -1.3525, 36.6526, City::Nairobi),
    location("Thika", -1.0332, 37.0871, City::Nairobi),
    location("Embakasi", -1.3197, 36.8947, City::Nairobi),
    location("Mombasa Town", -4.0435, 39.6682, City::Mombasa),
    location("Nyali", -4.0274, 39.7073, City::Mombasa),
    location("Likoni", -4.0833, 39.6667, City::Mombasa),
    location("Bamburi", -3.9833, 39.7167, City::Mombasa),
    location("Nakuru Town", -0.3031, 36.0800, City::Nakuru),
    location("Free Area", -0.2833, 36.0667, City::Nakuru),
    location("Lanet", -0.2167, 36.0500, City::Nakuru),
    location("Section 58", -0.3167, 36.0833, City::Nakuru),
    location("Eldoret Town", 0.5143, 35.2698, City::Eldoret),
    location("Langas", 0.5667, 35.2833, City::Eldoret),
    location("Pioneer", 0.5333, 35.2667, City::Eldoret),
    location("Elgon View", 0.5000, 35.2833, City::Eldoret),
    location("Kisumu Town", -0.0917, 34.7680, City::Kisumu),
    location("Kondele", -0.1000, 34.7500, City::Kisumu),
    location("Mamboleo", -0.0833, 34.7333, City::Kisumu),
    location("Manyatta", -0.1167, 34.7667, City::Kisumu),
];

pub fn find_location(name: &str) -> Option<&'static Location> {
    KENYAN_LOCATIONS
        .iter()
        .find(|location| location.name == name)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDefinition {
    pub city: City,
    pub origin: &'static str,
    pub destination: &'static str,
    pub intermediates: &'static [&'static str],
}

impl RouteDefinition {
    /// Number of stops on the route, counting the origin and destination.
    pub fn num_stages(&self) -> usize {
        self.intermediates.len() + 2
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.origin)
            .chain(self.intermediates.iter().copied())
            .chain(std::iter::once(self.destination))
    }
}

const fn route(
    city: City,
    origin: &'static str,
    destination: &'static str,
    intermediates: &'static [&'static str],
) -> RouteDefinition {
    RouteDefinition {
        city,
        origin,
        destination,
        intermediates,
    }
}

pub static ROUTE_DEFINITIONS: [RouteDefinition; 19] = [
    // Nairobi
    route(
        City::Nairobi,
        "Nairobi CBD",
        "Westlands",
        &["Uhuru Highway", "Museum Hill", "Parklands", "Sarit Centre"],
    ),
    route(
        City::Nairobi,
        "Nairobi CBD",
        "Karen",
        &["Nyayo Stadium", "Yaya Centre", "Adams Arcade", "Hardy"],
    ),
    route(
        City::Nairobi,
        "Nairobi CBD",
        "Ngong",
        &[
            "Nyayo Stadium",
            "Dagoretti Corner",
            "Riruta",
            "Uthiru",
            "Karen Junction",
        ],
    ),
    route(
        City::Nairobi,
        "Nairobi CBD",
        "Thika",
        &[
            "Pangani",
            "Roysambu",
            "Kasarani",
            "Mwiki",
            "Githurai 45",
            "Ruiru",
        ],
    ),
    route(
        City::Nairobi,
        "Nairobi CBD",
        "Embakasi",
        &[
            "Makongeni",
            "Kaloleni",
            "Jericho",
            "Donholm",
            "Umoja",
            "Buruburu",
        ],
    ),
    // Mombasa
    route(
        City::Mombasa,
        "Mombasa Town",
        "Nyali",
        &["Kizingo", "Nyali Bridge", "Nyali Cinemax", "City Mall"],
    ),
    route(
        City::Mombasa,
        "Mombasa Town",
        "Likoni",
        &["Likoni Ferry", "Shelly Beach", "Tiwi Junction"],
    ),
    route(
        City::Mombasa,
        "Mombasa Town",
        "Bamburi",
        &["Mwembe Tayari", "Nyali", "Kongowea", "Bamburi Mtambo"],
    ),
    route(
        City::Mombasa,
        "Nyali",
        "Bamburi",
        &["Nyali Bridge", "Reef Hotel", "Mamba Village", "Bombolulu"],
    ),
    // Nakuru
    route(
        City::Nakuru,
        "Nakuru Town",
        "Free Area",
        &["Kenyatta Avenue", "Stadium", "Pangani", "Kivumbini"],
    ),
    route(
        City::Nakuru,
        "Nakuru Town",
        "Lanet",
        &["Kenyatta Avenue", "London", "Milimani", "Lanet Barracks"],
    ),
    route(
        City::Nakuru,
        "Nakuru Town",
        "Section 58",
        &["Kenyatta Avenue", "Flamingo", "Mwariki", "Section 7"],
    ),
    // Eldoret
    route(
        City::Eldoret,
        "Eldoret Town",
        "Langas",
        &["Rupa's Mall", "Kapsoya", "Huruma", "Langas Estate"],
    ),
    route(
        City::Eldoret,
        "Eldoret Town",
        "Pioneer",
        &["Uganda Road", "Kipkaren", "West Indies", "Pioneer Estate"],
    ),
    route(
        City::Eldoret,
        "Eldoret Town",
        "Elgon View",
        &[
            "Oginga Odinga Street",
            "Race Course",
            "Kapseret",
            "Elgon View Estate",
        ],
    ),
    // Kisumu
    route(
        City::Kisumu,
        "Kisumu Town",
        "Kondele",
        &["Kibuye Market", "Jubilee Market", "Kondele Roundabout"],
    ),
    route(
        City::Kisumu,
        "Kisumu Town",
        "Mamboleo",
        &["Kibuye Market", "Kondele", "Nyamasaria", "Mamboleo Estate"],
    ),
    route(
        City::Kisumu,
        "Kisumu Town",
        "Manyatta",
        &["Kibuye Market", "Kondele", "Railway Station", "Manyatta Estate"],
    ),
    route(
        City::Kisumu,
        "Kondele",
        "Mamboleo",
        &[
            "Kondele Roundabout",
            "Nyamasaria",
            "Migosi",
            "Mamboleo Junction",
        ],
    ),
];
