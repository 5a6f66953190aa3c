/// Areas of Southampton a referee can register as their base.
pub const SOUTHAMPTON_AREAS: [&str; 16] = [
    "Bargate",
    "Bassett",
    "Bevois",
    "Bitterne",
    "Bitterne Park",
    "Coxford",
    "Freemantle",
    "Harefield",
    "Millbrook",
    "Peartree",
    "Portswood",
    "Redbridge",
    "Shirley",
    "Sholing",
    "Swaythling",
    "Woolston",
];

pub fn is_known_area(area: &str) -> bool {
    SOUTHAMPTON_AREAS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(area.trim()))
}
