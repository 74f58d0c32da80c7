pub mod journey_manifest;
