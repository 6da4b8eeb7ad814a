use crate::commands::CmdResult;
use crate::error::{Result, RollcallError};
use crate::store::roster::Roster;
use crate::store::DataStore;

/// How a single record is being looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Scan-based lookup; first match wins when barcodes collide.
    Barcode(String),
    Id(String),
}

pub fn run<S: DataStore>(roster: &Roster<S>, lookup: &Lookup) -> Result<CmdResult> {
    let student = match lookup {
        Lookup::Barcode(code) => roster.find_by_barcode(code)?.clone(),
        Lookup::Id(id) => roster
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| RollcallError::NotFound(id.clone()))?,
    };
    Ok(CmdResult::default().with_listed(vec![student]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn roster() -> Roster<InMemoryStore> {
        Roster::open(InMemoryStore::new()).unwrap()
    }

    #[test]
    fn finds_by_barcode() {
        let r = roster();
        let result = run(&r, &Lookup::Barcode("1002".into())).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].given_name, "Jane");
    }

    #[test]
    fn finds_by_id() {
        let r = roster();
        let result = run(&r, &Lookup::Id("1001".into())).unwrap();
        assert_eq!(result.listed[0].surname, "Doe");
    }

    #[test]
    fn unknown_keys_are_not_found() {
        let r = roster();
        for lookup in [Lookup::Barcode("x".into()), Lookup::Id("x".into())] {
            assert!(matches!(
                run(&r, &lookup),
                Err(RollcallError::NotFound(_))
            ));
        }
    }
}
