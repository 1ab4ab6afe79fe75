mod barrel;
mod transport;
