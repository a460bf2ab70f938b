#[cfg(test)]
mod expansion;
#[cfg(test)]
mod utils;
