use log::info;

use crate::domain::Player;
use crate::errors::StorageError;
use crate::storage::RosterStore;

/// Escapes markup in a display name so it is stored inert.
///
/// Surrounding whitespace is dropped; names need not be unique.
pub fn sanitize_name(raw: &str) -> String {
    let mut clean = String::with_capacity(raw.len());

    for ch in raw.trim().chars() {
        match ch {
            '&' => clean.push_str("&amp;"),
            '<' => clean.push_str("&lt;"),
            '>' => clean.push_str("&gt;"),
            '"' => clean.push_str("&quot;"),
            '\'' => clean.push_str("&#x27;"),
            _ => clean.push(ch),
        }
    }

    clean
}

/// Adds a player under a fresh id assigned by the store
pub fn register_player<S: RosterStore>(store: &mut S, raw_name: &str) -> Result<Player, StorageError> {
    let player = store.register_player(&sanitize_name(raw_name))?;
    info!("Registered player {} ({})", player.id, player.name);
    Ok(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_plain_names_are_untouched() {
        assert_eq!(sanitize_name("Sosamma"), "Sosamma");
        assert_eq!(sanitize_name("Chandra Nalaar"), "Chandra Nalaar");
    }

    #[test]
    fn test_markup_is_escaped() {
        assert_eq!(
            sanitize_name("<script>alert('x')</script>"),
            "&lt;script&gt;alert(&#x27;x&#x27;)&lt;/script&gt;"
        );
        assert_eq!(sanitize_name("Tom & \"Jerry\""), "Tom &amp; &quot;Jerry&quot;");
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(sanitize_name("  Alex \n"), "Alex");
    }

    #[test]
    fn test_register_stores_sanitized_name() {
        let mut store = MemoryStore::new();

        let player = register_player(&mut store, " <b>Sam</b> ").unwrap();

        assert_eq!(player.id, 1);
        assert_eq!(player.name, "&lt;b&gt;Sam&lt;/b&gt;");
        assert_eq!(store.find_player(1).unwrap(), Some(player));
    }
}
