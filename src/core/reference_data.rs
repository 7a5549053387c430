//! Curated fossil-site coordinates.
//!
//! Locations are listed in lookup order: the substring stage of
//! [`CoordinateResolver::resolve_by_location`](super::resolver::CoordinateResolver::resolve_by_location)
//! returns the first entry whose name occurs in the text, so broad regions
//! listed early shadow the more specific sites listed after them.

/// `(species id, latitude, longitude)`
pub const SPECIES_SITES: &[(&str, f64, f64)] = &[
    // Cretaceous - North America
    ("tyrannosaurus-rex", 46.9, -101.5),
    ("triceratops", 39.74, -104.99),
    ("ankylosaurus", 47.03, -106.75),
    ("parasaurolophus", 50.76, -111.49),
    ("pteranodon", 38.80, -100.94),
    ("pachycephalosaurus", 47.5, -110.5),
    ("deinosuchus", 47.2, -109.8),
    ("elasmosaurus", 38.5, -99.5),
    ("quetzalcoatlus", 29.25, -103.25),
    ("styracosaurus", 50.8, -111.5),
    // Cretaceous - Other
    ("velociraptor", 44.14, 103.72),
    ("spinosaurus", 28.41, 28.81),
    ("carnotaurus", -43.00, -67.50),
    ("iguanodon", 51.02, -0.14),
    ("mosasaurus", 50.85, 5.69),
    ("therizinosaurus", 44.2, 104.0),
    ("baryonyx", 51.32, -0.53),
    ("microraptor", 41.5, 123.0),
    ("giganotosaurus", -42.5, -69.5),
    ("sarcosuchus", 23.0, 5.0),
    ("kaprosuchus", 16.0, 8.0),
    // Jurassic - North America
    ("stegosaurus", 39.68, -105.19),
    ("brachiosaurus", 39.08, -108.58),
    ("allosaurus", 39.37, -108.55),
    ("diplodocus", 39.60, -105.10),
    // Jurassic - Europe
    ("archaeopteryx", 48.89, 10.99),
    ("plesiosaurus", 50.72, -2.44),
    ("liopleurodon", 47.0, 2.5),
    ("dimorphodon", 50.72, -2.44),
    // Triassic
    ("coelophysis", 36.28, -106.5),
    ("plateosaurus", 51.0, 10.0),
    ("postosuchus", 33.7, -100.0),
    // Permian
    ("dimetrodon", 33.6, -99.3),
    ("edaphosaurus", 33.5, -99.5),
    ("helicoprion", 60.0, 60.0),
    ("inostrancevia", 64.5, 40.5),
    // Devonian
    ("dunkleosteus", 41.5, -81.7),
    ("tiktaalik", 78.0, -85.0),
    ("ichthyostega", 72.0, -40.0),
    // Carboniferous
    ("arthropleura", 51.0, 10.5),
    ("meganeura", 46.3, 2.7),
    // Cambrian
    ("anomalocaris", 51.4, -116.5),
    ("hallucigenia", 51.4, -116.5),
    ("opabinia", 51.4, -116.5),
    // Paleogene
    ("titanoboa", 11.03, -72.69),
    ("basilosaurus", 30.0, -91.0),
    ("andrewsarchus", 44.0, 104.5),
    ("paraceratherium", 43.0, 77.0),
    // Neogene
    ("megalodon", 10.0, -140.0),
    ("argentavis", -36.5, -64.5),
    // Pleistocene
    ("woolly-mammoth", 71.24, -179.42),
    ("smilodon", 34.06, -118.36),
    ("glyptodon", -34.60, -58.38),
    ("megatherium", -34.57, -59.14),
    // Holocene
    ("dodo", -20.16, 57.50),
    ("thylacine", -42.88, 147.33),
];

/// `(location name, latitude, longitude)`
pub const LOCATION_SITES: &[(&str, f64, f64)] = &[
    // North America
    ("North America", 45.0, -100.0),
    ("North America (USA)", 39.0, -98.0),
    ("Montana, USA", 47.0, -110.0),
    ("Hell Creek Formation, Montana, USA", 46.9, -101.5),
    ("Denver, Colorado, USA", 39.74, -104.99),
    ("Morrison, Colorado, USA", 39.68, -105.19),
    ("Colorado River Valley, USA", 39.08, -108.58),
    ("Colorado, USA", 39.37, -108.55),
    ("Wyoming, USA", 43.0, -107.5),
    ("Alberta, Canada", 50.76, -111.49),
    ("British Columbia, Canada", 51.4, -116.5),
    ("Western Kansas, USA", 38.80, -100.94),
    ("Kansas, USA", 38.5, -99.5),
    ("New Mexico, USA", 36.28, -106.5),
    ("Louisiana, USA", 30.0, -91.0),
    ("Big Bend National Park, Texas, USA", 29.25, -103.25),
    // South America
    ("South America", -15.0, -60.0),
    ("Argentina", -34.0, -64.0),
    ("Chubut, Argentina", -43.00, -67.50),
    ("Brazil", -10.0, -55.0),
    ("Patagonia, Argentina", -42.0, -68.0),
    ("Cerrejón, Colombia", 11.03, -72.69),
    ("Luján, Argentina", -34.57, -59.14),
    ("La Pampa, Argentina", -36.5, -64.5),
    // Africa
    ("Africa", 0.0, 20.0),
    ("North Africa", 25.0, 20.0),
    ("Africa (Niger)", 16.0, 8.0),
    ("Niger", 16.0, 8.0),
    ("Egypt", 28.41, 28.81),
    ("Tanzania", -6.0, 35.0),
    ("Morocco", 32.0, -6.0),
    ("South Africa", -30.0, 25.0),
    ("Sahara Desert", 23.0, 5.0),
    // Europe
    ("Europe", 50.0, 10.0),
    ("Germany", 48.89, 10.99),
    ("England", 52.0, -1.0),
    ("Dorset, England", 50.72, -2.44),
    ("Sussex, England", 51.02, -0.14),
    ("Surrey, England", 51.32, -0.53),
    ("Dorset, UK", 50.72, -2.44),
    ("United Kingdom", 52.0, -1.0),
    ("France", 46.3, 2.7),
    ("Spain", 40.0, -3.5),
    ("Belgium", 50.8, 4.3),
    ("Russia", 64.5, 40.5),
    ("Northern Dvina River, Russia", 64.5, 40.5),
    ("Ural Mountains, Russia", 60.0, 60.0),
    ("Netherlands", 50.85, 5.69),
    ("Maastricht, Netherlands", 50.85, 5.69),
    // Asia
    ("Asia", 34.0, 100.0),
    ("Central Asia", 43.0, 77.0),
    ("Kazakhstan", 43.0, 77.0),
    ("Mongolia", 44.14, 103.72),
    ("Gobi Desert, Mongolia", 44.14, 103.72),
    ("China", 35.0, 105.0),
    ("Liaoning, China", 41.5, 123.0),
    ("India", 20.0, 77.0),
    ("Pakistan", 30.0, 70.0),
    ("Siberia", 71.24, -179.42),
    // Australia & Oceania
    ("Australia", -25.0, 135.0),
    ("Queensland, Australia", -20.0, 145.0),
    ("Tasmania, Australia", -42.88, 147.33),
    ("New Zealand", -41.0, 174.0),
    ("Mauritius", -20.16, 57.50),
    // Antarctica & Arctic
    ("Antarctica", -75.0, 0.0),
    ("Greenland", 72.0, -40.0),
    ("East Greenland", 72.0, -40.0),
    // Oceans
    ("Worldwide Oceans", 10.0, -140.0),
    ("Global", 10.0, -140.0),
    ("Global Oceans", 10.0, -140.0),
    ("Atlantic Ocean", 25.0, -40.0),
    ("Pacific Ocean", 10.0, -140.0),
    // Specific formations
    ("Burgess Shale, Canada", 51.4, -116.5),
    ("Ellesmere Island, Canada", 78.0, -85.0),
    ("La Brea Tar Pits, California", 34.06, -118.36),
    ("Solnhofen, Germany", 48.89, 10.99),
    ("Cleveland Shale, Ohio", 41.5, -81.7),
    ("Ohio, USA", 41.5, -81.7),
    ("Commentry, France", 46.3, 2.7),
    ("Texas, USA", 33.6, -99.3),
    ("Texas Red Beds, Texas, USA", 33.5, -99.5),
    ("Ghost Ranch, New Mexico", 36.28, -106.5),
];
