/// Content-derived node identity
///
/// Every cross-entity reference in the exported graph is a recomputed
/// string identifier, never a handle or index, so re-running an import
/// against the same history reproduces identical identifiers.
use crate::quad::Value;
use git2::Oid;

/// IRI for a git object (commit or blob): `sha1:` plus lowercase hex.
pub fn git_hash_iri(oid: Oid) -> Value {
    Value::iri(format!("sha1:{}", oid))
}

/// Blank node for a person signature.
///
/// The token is the lowercase hex MD5 of `name + NUL + email`, so two
/// signatures with the same literal name and email auto-merge into one
/// node while any one-character difference yields a distinct node.
pub fn person_node(name: &str, email: &str) -> Value {
    let mut input = Vec::with_capacity(name.len() + email.len() + 1);
    input.extend_from_slice(name.as_bytes());
    input.push(0);
    input.extend_from_slice(email.as_bytes());
    Value::bnode(format!("{:x}", md5::compute(&input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_hash_iri() {
        let oid = Oid::from_str("0123456789abcdef0123456789abcdef01234567").unwrap();
        assert_eq!(
            git_hash_iri(oid),
            Value::iri("sha1:0123456789abcdef0123456789abcdef01234567")
        );
    }

    #[test]
    fn test_person_node_known_digests() {
        assert_eq!(
            person_node("Alice Example", "alice@example.com"),
            Value::bnode("2c575a302233f42a37f25a888e7fd10c")
        );
        assert_eq!(
            person_node("Bob", "bob@example.com"),
            Value::bnode("863591efafdf5d8f1e75ff09e3b6de8d")
        );
    }

    #[test]
    fn test_person_node_is_deterministic() {
        let a = person_node("Alice Example", "alice@example.com");
        let b = person_node("Alice Example", "alice@example.com");
        assert_eq!(a, b);
    }

    #[test]
    fn test_person_node_distinguishes_email() {
        let com = person_node("Alice Example", "alice@example.com");
        let org = person_node("Alice Example", "alice@example.org");
        assert_ne!(com, org);
    }

    #[test]
    fn test_person_node_separator_prevents_ambiguity() {
        // "ab" + "c" and "a" + "bc" must hash differently
        let left = person_node("ab", "c");
        let right = person_node("a", "bc");
        assert_ne!(left, right);
    }
}
