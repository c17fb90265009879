//! MCP tool definitions for airfreight.

use super::protocol::{Tool, ToolCallResult};
use crate::error::Result;
use crate::estimator::{TravelRequest, DEFAULT_CRUISING_SPEED_KMH};
use crate::geo::GeoPoint;
use serde::Deserialize;
use serde_json::{json, Value};

/// Name of the travel-time tool.
pub const CARGO_TRAVEL_TOOL: &str = "calculate_cargo_travel_time";

/// Arguments of [`CARGO_TRAVEL_TOOL`].
#[derive(Debug, Clone, Deserialize)]
pub struct CargoTravelArgs {
    pub origin_coords: [f64; 2],
    pub destination_coords: [f64; 2],
    #[serde(default)]
    pub cruising_speed_kmh: Option<f64>,
}

impl CargoTravelArgs {
    pub fn to_request(&self) -> TravelRequest {
        TravelRequest::new(
            GeoPoint::from(self.origin_coords),
            GeoPoint::from(self.destination_coords),
        )
        .with_speed(self.cruising_speed_kmh.unwrap_or(DEFAULT_CRUISING_SPEED_KMH))
    }

    /// Run the estimate and render the tool sentence.
    pub fn run(&self) -> Result<String> {
        let request = self.to_request();
        let estimate = request.estimate()?;
        Ok(request.describe(&estimate))
    }
}

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    vec![Tool {
        name: CARGO_TRAVEL_TOOL.to_string(),
        description: "Calculate the travel time for a cargo plane between two points on Earth \
            using great-circle distance."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "origin_coords": {
                    "type": "array",
                    "items": [{ "type": "number" }, { "type": "number" }],
                    "minItems": 2,
                    "maxItems": 2,
                    "description": "Tuple of [latitude, longitude] for the starting point"
                },
                "destination_coords": {
                    "type": "array",
                    "items": [{ "type": "number" }, { "type": "number" }],
                    "minItems": 2,
                    "maxItems": 2,
                    "description": "Tuple of [latitude, longitude] for the destination"
                },
                "cruising_speed_kmh": {
                    "type": "number",
                    "exclusiveMinimum": 0,
                    "default": DEFAULT_CRUISING_SPEED_KMH,
                    "description": "Optional cruising speed in km/h (defaults to 750 km/h for typical cargo planes)"
                }
            },
            "required": ["origin_coords", "destination_coords"]
        }),
    }]
}

/// Dispatch a tool call by name.
pub fn call_tool(name: &str, arguments: Option<Value>) -> ToolCallResult {
    match name {
        CARGO_TRAVEL_TOOL => {
            let args = match arguments {
                Some(a) => a,
                None => return ToolCallResult::error("Missing arguments".to_string()),
            };

            let args: CargoTravelArgs = match serde_json::from_value(args) {
                Ok(args) => args,
                Err(e) => return ToolCallResult::error(format!("Invalid arguments: {}", e)),
            };

            match args.run() {
                Ok(text) => ToolCallResult::text(text),
                Err(e) => ToolCallResult::error(e.to_string()),
            }
        }
        _ => ToolCallResult::error(format!("Unknown tool: {}", name)),
    }
}
