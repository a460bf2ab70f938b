mod integration;
mod mixed_family;
