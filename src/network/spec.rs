use serde::{Deserialize, Serialize};

use crate::activation::strategy::ActivationKind;
use crate::error::Result;
use crate::network::network::Network;

/// A fully serializable description of a network architecture.
///
/// `NetworkSpec` can be saved to / loaded from JSON independently of any
/// trained network, making it possible to store architecture configurations
/// before training starts. Only the architecture is persisted; trained
/// weights never are.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Human-readable name used as the config file stem.
    pub name: String,
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    pub learning_rate: f64,
    /// Activation strategy installed on the built network.
    pub activation: ActivationKind,
}

impl NetworkSpec {
    /// Builds a freshly initialized `Network` matching this description.
    pub fn build(&self) -> Result<Network> {
        let mut network = Network::with_learning_rate(
            self.input_size,
            self.hidden_size,
            self.output_size,
            self.learning_rate,
        )?;
        network.set_activator(self.activation.strategy());
        Ok(network)
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    fn sample_spec() -> NetworkSpec {
        NetworkSpec {
            name: "comparator".to_string(),
            input_size: 2,
            hidden_size: 4,
            output_size: 1,
            learning_rate: 0.3,
            activation: ActivationKind::Sigmoid,
        }
    }

    #[test]
    fn build_produces_matching_network() {
        let network = sample_spec().build().unwrap();
        assert_eq!(network.input_size(), 2);
        assert_eq!(network.hidden_size(), 4);
        assert_eq!(network.output_size(), 1);
        assert_eq!(network.learning_rate(), 0.3);
    }

    #[test]
    fn build_rejects_zero_sizes() {
        let mut spec = sample_spec();
        spec.hidden_size = 0;
        assert!(matches!(
            spec.build(),
            Err(NetworkError::InvalidArgument(_))
        ));
    }

    #[test]
    fn json_round_trip() {
        let spec = sample_spec();
        let json = serde_json::to_string(&spec).unwrap();
        let back: NetworkSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, spec.name);
        assert_eq!(back.hidden_size, spec.hidden_size);
        assert_eq!(back.activation, spec.activation);
    }

    #[test]
    fn file_round_trip() {
        let spec = sample_spec();
        let path = std::env::temp_dir().join("hematite-spec-test.json");
        let path = path.to_str().unwrap();
        spec.save_json(path).unwrap();
        let back = NetworkSpec::load_json(path).unwrap();
        std::fs::remove_file(path).ok();
        assert_eq!(back.input_size, spec.input_size);
        assert_eq!(back.learning_rate, spec.learning_rate);
    }
}
