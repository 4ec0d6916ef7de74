/// Pairs a source CSV column with the data stream it is republished on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub source_column: &'static str,
    pub stream_name: &'static str,
}

/// The fixed set of recognized well measurements. Lookup order within a row
/// follows table order, so publishes within a row always come out in this
/// sequence.
pub const COLUMN_MAPPINGS: [ColumnMapping; 10] = [
    ColumnMapping {
        source_column: "water_pressure",
        stream_name: "water-pressure",
    },
    ColumnMapping {
        source_column: "casing_pressure",
        stream_name: "casing-pressure",
    },
    ColumnMapping {
        source_column: "torque",
        stream_name: "torque_new",
    },
    ColumnMapping {
        source_column: "water_flow",
        stream_name: "water-flow",
    },
    ColumnMapping {
        source_column: "gas_volume_flow",
        stream_name: "gas-volume-flow",
    },
    ColumnMapping {
        source_column: "pump_speed",
        stream_name: "pump-speed",
    },
    ColumnMapping {
        source_column: "downhole_pressure",
        stream_name: "downhole-pressure",
    },
    ColumnMapping {
        source_column: "water_level",
        stream_name: "water-level",
    },
    ColumnMapping {
        source_column: "torque_op",
        stream_name: "torque-op",
    },
    ColumnMapping {
        source_column: "gas_line_pressure",
        stream_name: "gas-line-pressure",
    },
];
