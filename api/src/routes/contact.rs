//! Static company contact document.

use actix_web::HttpResponse;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Geo coordinates for the map widget on the contact screen
#[derive(Debug, Clone, Serialize)]
pub struct ContactLocation {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "latitudeDelta")]
    pub latitude_delta: f64,
    #[serde(rename = "longitudeDelta")]
    pub longitude_delta: f64,
}

/// Company contact details served verbatim to the contact screen
#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub email: &'static str,
    pub website: &'static str,
    #[serde(rename = "officeAddress")]
    pub office_address: &'static str,
    pub location: ContactLocation,
    #[serde(rename = "googleMapsLink")]
    pub google_maps_link: &'static str,
    pub availability: &'static str,
}

static CONTACT_INFO: Lazy<ContactInfo> = Lazy::new(|| ContactInfo {
    email: "vishwasritechnologies@vishcom.net",
    website: "https://www.vishcom.net",
    office_address: "Vishwasri Technologies H.no: 1-10-74/b&c  Flat no: T - 402/B,  \
                     Technopolis Galada Complex, Dwaraka das colony, Begumpet 500016",
    location: ContactLocation {
        latitude: 17.443909,
        longitude: 78.463228,
        latitude_delta: 0.005,
        longitude_delta: 0.005,
    },
    google_maps_link: "1-10-74/B&C FLAT NO: T-402/B, TECHNOPOLIS GALADA COMPLEX, \
                       DWARAKA DAS COLONY, BEGUMPET 500016",
    availability: "Mon - Sat | 9 AM - 6 PM",
});

/// Handler for GET /contact-info
pub async fn contact_info() -> HttpResponse {
    HttpResponse::Ok().json(&*CONTACT_INFO)
}
