//! Ownership trait for tenant-scoped records.
//!
//! Every stored record carries the tenant that created it. Storage adapters
//! use `OwnedByTenant` to filter lookups so that a record is invisible to
//! every other tenant, even when its id is known.

use super::TenantId;

/// Trait for records that belong to exactly one tenant.
pub trait OwnedByTenant {
    /// Returns the tenant that owns this record.
    fn tenant(&self) -> &TenantId;

    /// Returns `true` if `tenant` owns this record.
    fn is_owned_by(&self, tenant: &TenantId) -> bool {
        self.tenant() == tenant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRecord {
        tenant: TenantId,
    }

    impl OwnedByTenant for TestRecord {
        fn tenant(&self) -> &TenantId {
            &self.tenant
        }
    }

    fn tenant(id: &str) -> TenantId {
        TenantId::new(id).unwrap()
    }

    #[test]
    fn is_owned_by_returns_true_for_owner() {
        let record = TestRecord {
            tenant: tenant("admin"),
        };
        assert!(record.is_owned_by(&tenant("admin")));
    }

    #[test]
    fn is_owned_by_returns_false_for_other_tenant() {
        let record = TestRecord {
            tenant: tenant("admin"),
        };
        assert!(!record.is_owned_by(&tenant("intruder")));
    }
}
