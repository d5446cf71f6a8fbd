use tracing::Level;

/// Install the global fmt subscriber at `level`.
pub fn init(level: Level) {
    if let Err(e) = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
    {
        tracing::debug!("Subscriber already installed: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_keeps_the_first_subscriber() {
        init(Level::DEBUG);
        init(Level::WARN);
        assert!(tracing::enabled!(Level::DEBUG));
    }
}
