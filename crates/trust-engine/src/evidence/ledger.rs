use trust_core::models::Evidence;

/// Append-only evidence sequence for a single subject.
///
/// Tracks whether any `DirectObservation` has been seen so the ceiling
/// calculator does not rescan the history on every query.
#[derive(Debug, Clone, Default)]
pub struct EvidenceLedger {
    items: Vec<Evidence>,
    direct_observations: usize,
}

impl EvidenceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. Returns `true` if it is the subject's first direct observation.
    pub fn append(&mut self, evidence: Evidence) -> bool {
        let first_direct =
            evidence.evidence_type.is_direct_observation() && self.direct_observations == 0;
        if evidence.evidence_type.is_direct_observation() {
            self.direct_observations += 1;
        }
        self.items.push(evidence);
        first_direct
    }

    pub fn items(&self) -> &[Evidence] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_direct_observation(&self) -> bool {
        self.direct_observations > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trust_core::models::EvidenceType;

    fn item(ty: EvidenceType) -> Evidence {
        Evidence::new("subject", ty, 0.5, "test").unwrap()
    }

    #[test]
    fn append_preserves_order() {
        let mut ledger = EvidenceLedger::new();
        ledger.append(item(EvidenceType::Historical));
        ledger.append(item(EvidenceType::EnergyProof));
        let kinds: Vec<_> = ledger.items().iter().map(|e| e.evidence_type.label()).collect();
        assert_eq!(kinds, vec!["historical", "energy_proof"]);
    }

    #[test]
    fn only_first_direct_observation_is_reported() {
        let mut ledger = EvidenceLedger::new();
        assert!(!ledger.append(item(EvidenceType::Historical)));
        assert!(!ledger.has_direct_observation());
        assert!(ledger.append(item(EvidenceType::DirectObservation)));
        assert!(!ledger.append(item(EvidenceType::DirectObservation)));
        assert!(ledger.has_direct_observation());
        assert_eq!(ledger.len(), 3);
    }
}
