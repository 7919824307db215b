use crate::quotes::domain::ConversionScenario;

/// The built-in conversion scenario table, in survey-priority order.
///
/// Entry text is load-bearing: the matcher parses bedroom, bathroom, and
/// occupant counts out of these strings, and the reasoning text is returned
/// to customers verbatim.
pub(super) fn standard_scenarios() -> Vec<ConversionScenario> {
    vec![
        scenario(
            "1",
            "1-bedroom flat, 1 bathroom",
            "1-2 people",
            "Electric storage heaters, no gas boiler",
            "New Gas Combi Boiler Installation",
            "24kW combi, 9.8 LPM flow",
            Some(9.8),
            Some(24),
            None,
            "Compact flat with low hot water demand - an entry-level combi avoids losing cupboard space to a cylinder.",
        ),
        scenario(
            "2",
            "2-bedroom terraced house, 1 bathroom",
            "couple",
            "Ageing combi boiler approaching end of life",
            "New Gas Combi Boiler Installation",
            "28kW combi, 11.5 LPM flow",
            Some(11.5),
            Some(28),
            None,
            "Like-for-like combi swap keeps installation simple and running costs low for two occupants.",
        ),
        scenario(
            "3",
            "2-bedroom flat, 1 bathroom",
            "2-3 people",
            "Regular boiler with loft tank and airing-cupboard cylinder",
            "Combi Boiler Conversion",
            "30kW combi, 12.2 LPM flow",
            Some(12.2),
            Some(30),
            None,
            "Removing the tank and cylinder frees storage space, and mains-pressure hot water suits a single bathroom.",
        ),
        scenario(
            "4",
            "3-bedroom semi-detached house, 1 main bathroom",
            "family of 4",
            "Ageing system boiler with vented cylinder",
            "Combi Boiler Conversion",
            "34kW combi, 14 LPM flow",
            Some(14.0),
            Some(34),
            None,
            "Single bathroom family home - high-power combi handles increased demand.",
        ),
        scenario(
            "5",
            "3-bedroom terraced house, 1 bathroom",
            "2-3 people",
            "Working combi boiler, poor efficiency rating",
            "New Gas Combi Boiler Installation",
            "30kW combi, 12.2 LPM flow",
            Some(12.2),
            Some(30),
            None,
            "Moderate demand household - a mid-range combi restores efficiency without oversizing.",
        ),
        scenario(
            "6",
            "3-bedroom semi-detached house, 2 bathrooms",
            "family of 4",
            "System boiler with undersized 120L cylinder",
            "System Boiler Upgrade",
            "26kW system boiler, 180L unvented cylinder",
            None,
            Some(26),
            Some(180),
            "Two bathrooms with regular overlap - an upgraded cylinder stops the hot water running cold.",
        ),
        scenario(
            "7",
            "3-bedroom detached house, 2 bathrooms",
            "3-4 people",
            "Regular boiler with gravity-fed showers",
            "System Boiler Installation",
            "28kW system boiler, 180L unvented cylinder",
            None,
            Some(28),
            Some(180),
            "Unvented cylinder lifts shower pressure across both bathrooms without a loft tank.",
        ),
        scenario(
            "8",
            "4-bedroom semi-detached house, 1 bathroom",
            "family of 4",
            "Ageing combi boiler struggling at peak times",
            "New Gas Combi Boiler Installation",
            "35kW combi, 14.5 LPM flow",
            Some(14.5),
            Some(35),
            None,
            "Larger home but a single bathroom - a high-output combi still covers peak draw-off.",
        ),
        scenario(
            "9",
            "4-bedroom detached house, 1 main bathroom + 1 ensuite",
            "family of 5",
            "Regular boiler with vented cylinder",
            "System Boiler Upgrade",
            "28kW system boiler, 210L unvented cylinder",
            None,
            Some(28),
            Some(210),
            "Five occupants across two bathrooms - stored hot water covers simultaneous showers.",
        ),
        scenario(
            "10",
            "4-bedroom detached house, 2 bathrooms",
            "family of 4",
            "System boiler with failing 150L cylinder",
            "System Boiler Upgrade",
            "28kW system boiler, 210L unvented cylinder",
            None,
            Some(28),
            Some(210),
            "High-demand family home - a larger cylinder and modern system boiler keep recovery times short.",
        ),
        scenario(
            "11",
            "4-bedroom detached house, 3 bathrooms",
            "family of 5",
            "Regular boiler, two cold-water tanks",
            "System Boiler Installation",
            "32kW system boiler, 250L unvented cylinder",
            None,
            Some(32),
            Some(250),
            "Three bathrooms demand stored volume - a 250L unvented cylinder supports back-to-back showers.",
        ),
        scenario(
            "12",
            "5-bedroom detached house, 3 bathrooms",
            "family of 5",
            "Ageing system boiler with 170L cylinder",
            "System Boiler Upgrade",
            "35kW system boiler, 300L unvented cylinder",
            None,
            Some(35),
            Some(300),
            "Large household with three bathrooms - generous storage prevents recovery gaps at peak times.",
        ),
        scenario(
            "13",
            "2-bedroom bungalow, 1 bathroom",
            "couple",
            "Back boiler behind the fire",
            "Combi Boiler Conversion",
            "26kW combi, 10.8 LPM flow",
            Some(10.8),
            Some(26),
            None,
            "Retiring the back boiler for a compact combi simplifies the system and cuts gas use.",
        ),
        scenario(
            "14",
            "1-bedroom apartment, 1 bathroom",
            "1-2 people",
            "Electric panel heaters only",
            "New Gas Combi Boiler Installation",
            "24kW combi, 9.8 LPM flow",
            Some(9.8),
            Some(24),
            None,
            "First gas installation - a small combi is the cheapest route to wet central heating.",
        ),
        scenario(
            "15",
            "3-bedroom semi-detached house, 1 bathroom + cloakroom",
            "3-4 people",
            "Working system boiler, cylinder in good order",
            "System Boiler Upgrade",
            "24kW system boiler, 150L unvented cylinder",
            None,
            Some(24),
            Some(150),
            "Stored hot water already suits the household routine - a modern system boiler lifts efficiency.",
        ),
        scenario(
            "16",
            "4-bedroom townhouse, 2 bathrooms",
            "3-4 people",
            "Combi boiler unable to serve two showers",
            "System Boiler Installation",
            "28kW system boiler, 180L unvented cylinder",
            None,
            Some(28),
            Some(180),
            "A combi cannot feed two simultaneous showers well - stored hot water removes the bottleneck.",
        ),
        scenario(
            "17",
            "5-bedroom detached house, 2 bathrooms",
            "family of 5",
            "Regular boiler with tired pipework",
            "System Boiler Installation",
            "30kW system boiler, 250L unvented cylinder",
            None,
            Some(30),
            Some(250),
            "Large family with heavy evening demand - a high-recovery system boiler and 250L cylinder keep up.",
        ),
        scenario(
            "18",
            "2-bedroom terraced house, 2 bathrooms",
            "2-3 people",
            "Combi boiler, pressure drops with both showers",
            "System Boiler Installation",
            "24kW system boiler, 150L unvented cylinder",
            None,
            Some(24),
            Some(150),
            "Two bathrooms even in a small home justify stored hot water for steady pressure.",
        ),
        scenario(
            "19",
            "3-bedroom detached house, 1 bathroom",
            "3 adults",
            "House share with staggered schedules",
            "New Gas Combi Boiler Installation",
            "32kW combi, 13.1 LPM flow",
            Some(13.1),
            Some(32),
            None,
            "Staggered usage suits on-demand hot water - a strong combi avoids reheating a cylinder nobody shares.",
        ),
        scenario(
            "20",
            "6-bedroom period property, 3 bathrooms",
            "family of 5",
            "Regular boiler, original cast-iron radiators",
            "System Boiler Installation",
            "40kW system boiler, 300L unvented cylinder",
            None,
            Some(40),
            Some(300),
            "Heat-hungry period fabric and three bathrooms need maximum output and storage.",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn scenario(
    id: &str,
    property_description: &str,
    occupants: &str,
    current_system: &str,
    recommendation: &str,
    recommended_specification: &str,
    flow_rate_lpm: Option<f64>,
    kw_output: Option<u32>,
    cylinder_size: Option<u32>,
    reasoning: &str,
) -> ConversionScenario {
    ConversionScenario {
        id: id.to_string(),
        property_description: property_description.to_string(),
        occupants: occupants.to_string(),
        current_system: current_system.to_string(),
        recommendation: recommendation.to_string(),
        recommended_specification: recommended_specification.to_string(),
        flow_rate_lpm,
        kw_output,
        cylinder_size,
        reasoning: reasoning.to_string(),
    }
}
