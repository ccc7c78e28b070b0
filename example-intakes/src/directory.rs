/// Ecosystem partner directory, rendered in the scrolling marquee lanes.
pub const ECOSYSTEM_PARTNERS: &[&str] = &[
    "888VC",
    "AWS",
    "EarlySeed Ventures",
    "Faad Capital",
    "Google for Startups",
    "IAAA",
    "Indian Angel Network",
    "IIM Calcutta",
    "IPV",
    "IVB",
    "Maker Bhavan Foundation",
    "Microsoft for Startups",
    "Nasscom",
    "O2 Angels Network",
    "Realtime",
    "River Venture Studio",
    "Soonicorn Ventures",
    "Startup TN",
    "Utpata Ventures",
    "Venture Catalysts",
    "Warmup Ventures",
    "WEH Ventures",
];

/// Split the directory into two lanes for the parallax display: the second
/// lane reversed so adjacent rows never show the same neighbor order.
pub fn partner_lanes() -> Vec<Vec<&'static str>> {
    let forward: Vec<&str> = ECOSYSTEM_PARTNERS.to_vec();
    let mut reversed = forward.clone();
    reversed.reverse();
    vec![forward, reversed]
}
