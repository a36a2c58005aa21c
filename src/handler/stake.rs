use std::collections::{BTreeMap, BTreeSet, HashMap};

use bigdecimal::BigDecimal;

use crate::{
    configuration::{AppState, State},
    error::Error,
    model::{Bond, PosReward, Unbond},
    types::{StakePositionEntry, StakeSummary, StakeTotal},
};

/// A raw per-event ledger row that credits some amount to a validator.
pub trait StakeRow {
    fn validator_id(&self) -> i32;
    fn raw_amount(&self) -> &BigDecimal;
}

impl StakeRow for Bond {
    fn validator_id(&self) -> i32 {
        self.validator_id
    }

    fn raw_amount(&self) -> &BigDecimal {
        &self.raw_amount
    }
}

impl StakeRow for Unbond {
    fn validator_id(&self) -> i32 {
        self.validator_id
    }

    fn raw_amount(&self) -> &BigDecimal {
        &self.raw_amount
    }
}

impl StakeRow for PosReward {
    fn validator_id(&self) -> i32 {
        self.validator_id
    }

    fn raw_amount(&self) -> &BigDecimal {
        &self.raw_amount
    }
}

/// Collapses per-event rows into one exact-decimal amount per validator.
/// Addition is commutative, so the result does not depend on row order.
pub fn merge_positions<R>(rows: &[R]) -> BTreeMap<i32, BigDecimal>
where
    R: StakeRow,
{
    let mut merged: BTreeMap<i32, BigDecimal> = BTreeMap::new();

    for row in rows {
        merged
            .entry(row.validator_id())
            .and_modify(|amount| *amount += row.raw_amount())
            .or_insert_with(|| row.raw_amount().clone());
    }

    merged
}

/// Splits unbonds into (unbonding, withdrawable) relative to the query
/// epoch. Funds are mature at exactly the withdrawal epoch, so equality
/// lands in withdrawable.
pub fn partition_unbonds(
    rows: Vec<Unbond>,
    epoch: i32,
) -> (Vec<Unbond>, Vec<Unbond>) {
    rows.into_iter().partition(|row| row.withdraw_epoch < epoch)
}

pub async fn get_stake(
    state: &AppState<State>,
    address: &str,
    epoch: i32,
) -> Result<StakeSummary, Error> {
    let (unbonds, bonds, rewards) = tokio::try_join!(
        state.database.unbond.get_by_address(address),
        state.database.bond.get_by_address(address),
        state.database.pos_reward.get_unclaimed(address, epoch),
    )?;

    let (unbonding, withdrawable) = partition_unbonds(unbonds, epoch);

    let bonds = merge_positions(&bonds);
    let unbonding = merge_positions(&unbonding);
    let withdrawable = merge_positions(&withdrawable);
    let rewards = merge_positions(&rewards);

    let ids: Vec<i32> = validator_union(&[
        &bonds,
        &unbonding,
        &withdrawable,
        &rewards,
    ])
    .into_iter()
    .collect();

    let validators = state.database.validator.get_by_ids(&ids).await?;
    let addresses: HashMap<i32, String> = validators
        .into_iter()
        .map(|validator| (validator.id, validator.namada_address))
        .collect();

    Ok(build_summary(
        &ids,
        &addresses,
        &bonds,
        &unbonding,
        &withdrawable,
        &rewards,
    ))
}

fn validator_union(maps: &[&BTreeMap<i32, BigDecimal>]) -> BTreeSet<i32> {
    maps.iter()
        .flat_map(|map| map.keys().copied())
        .collect()
}

fn build_summary(
    ids: &[i32],
    addresses: &HashMap<i32, String>,
    bonds: &BTreeMap<i32, BigDecimal>,
    unbonding: &BTreeMap<i32, BigDecimal>,
    withdrawable: &BTreeMap<i32, BigDecimal>,
    rewards: &BTreeMap<i32, BigDecimal>,
) -> StakeSummary {
    let mut positions = Vec::with_capacity(ids.len());
    let mut total = StakeTotal::default();

    for id in ids {
        let entry = StakePositionEntry {
            validator_address: addresses.get(id).cloned(),
            bonds: amount_or_zero(bonds, *id),
            unbonds: amount_or_zero(unbonding, *id),
            withdrawable: amount_or_zero(withdrawable, *id),
            rewards: amount_or_zero(rewards, *id),
        };

        total.bonds += &entry.bonds;
        total.unbonds += &entry.unbonds;
        total.withdrawable += &entry.withdrawable;
        total.rewards += &entry.rewards;

        positions.push(entry);
    }

    total.total =
        &total.bonds + &total.unbonds + &total.withdrawable + &total.rewards;

    StakeSummary { positions, total }
}

fn amount_or_zero(map: &BTreeMap<i32, BigDecimal>, id: i32) -> BigDecimal {
    map.get(&id).cloned().unwrap_or_else(|| BigDecimal::from(0))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bigdecimal::BigDecimal;

    use crate::model::Unbond;

    use super::{
        build_summary, merge_positions, partition_unbonds, validator_union,
    };

    fn unbond(validator_id: i32, amount: u64, withdraw_epoch: i32) -> Unbond {
        Unbond {
            address: String::from("tnam1qq30qxv"),
            validator_id,
            raw_amount: BigDecimal::from(amount),
            withdraw_epoch,
        }
    }

    #[test]
    fn merge_of_empty_input_is_empty() {
        let merged = merge_positions::<Unbond>(&[]);
        assert!(merged.is_empty());
    }

    #[test]
    fn merge_sums_rows_per_validator() {
        let rows = vec![
            unbond(1, 100, 10),
            unbond(2, 5, 10),
            unbond(1, 50, 12),
            unbond(1, 25, 14),
        ];

        let merged = merge_positions(&rows);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[&1], BigDecimal::from(175));
        assert_eq!(merged[&2], BigDecimal::from(5));
    }

    #[test]
    fn merge_is_order_independent() {
        let rows = vec![
            unbond(3, 7, 1),
            unbond(1, 100, 2),
            unbond(3, 11, 3),
            unbond(2, 40, 4),
            unbond(1, 1, 5),
        ];

        let expected = merge_positions(&rows);

        let mut reversed = rows.clone();
        reversed.reverse();
        assert_eq!(merge_positions(&reversed), expected);

        let mut rotated = rows.clone();
        rotated.rotate_left(2);
        assert_eq!(merge_positions(&rotated), expected);

        let mut swapped = rows;
        swapped.swap(0, 4);
        swapped.swap(1, 3);
        assert_eq!(merge_positions(&swapped), expected);
    }

    #[test]
    fn merge_is_additive() {
        let split = merge_positions(&[unbond(1, 30, 1), unbond(1, 70, 2)]);
        let combined = merge_positions(&[unbond(1, 100, 1)]);

        assert_eq!(split[&1], combined[&1]);
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint() {
        let rows = vec![
            unbond(1, 10, 4),
            unbond(1, 20, 5),
            unbond(2, 30, 6),
            unbond(3, 40, 2),
        ];

        let (unbonding, withdrawable) = partition_unbonds(rows, 5);

        assert_eq!(unbonding.len() + withdrawable.len(), 4);
        assert!(unbonding.iter().all(|row| row.withdraw_epoch < 5));
        assert!(withdrawable.iter().all(|row| row.withdraw_epoch >= 5));
    }

    #[test]
    fn partition_tie_goes_to_withdrawable() {
        let (unbonding, withdrawable) =
            partition_unbonds(vec![unbond(1, 10, 5)], 5);

        assert!(unbonding.is_empty());
        assert_eq!(withdrawable.len(), 1);
    }

    #[test]
    fn same_validator_unbonds_split_across_buckets() {
        let rows = vec![unbond(7, 100, 4), unbond(7, 200, 5)];

        let (unbonding, withdrawable) = partition_unbonds(rows, 5);
        let unbonding = merge_positions(&unbonding);
        let withdrawable = merge_positions(&withdrawable);

        assert_eq!(unbonding[&7], BigDecimal::from(100));
        assert_eq!(withdrawable[&7], BigDecimal::from(200));
    }

    #[test]
    fn summary_of_single_bond() {
        let bonds = merge_positions(&[unbond(1, 100, 0)]);
        let empty = merge_positions::<Unbond>(&[]);
        let addresses = HashMap::from([(1, String::from("tnam1validator"))]);
        let ids: Vec<i32> =
            validator_union(&[&bonds, &empty]).into_iter().collect();

        let summary =
            build_summary(&ids, &addresses, &bonds, &empty, &empty, &empty);

        assert_eq!(summary.positions.len(), 1);
        let entry = &summary.positions[0];
        assert_eq!(
            entry.validator_address.as_deref(),
            Some("tnam1validator")
        );
        assert_eq!(entry.bonds, BigDecimal::from(100));
        assert_eq!(entry.unbonds, BigDecimal::from(0));
        assert_eq!(entry.withdrawable, BigDecimal::from(0));
        assert_eq!(entry.rewards, BigDecimal::from(0));
        assert_eq!(summary.total.total, BigDecimal::from(100));
    }

    #[test]
    fn summary_total_sums_all_categories() {
        let bonds = merge_positions(&[unbond(1, 100, 0)]);
        let unbonding = merge_positions(&[unbond(2, 10, 0)]);
        let withdrawable = merge_positions(&[unbond(1, 5, 0)]);
        let rewards = merge_positions(&[unbond(3, 1, 0)]);
        let addresses = HashMap::new();
        let ids: Vec<i32> =
            validator_union(&[&bonds, &unbonding, &withdrawable, &rewards])
                .into_iter()
                .collect();

        let summary = build_summary(
            &ids,
            &addresses,
            &bonds,
            &unbonding,
            &withdrawable,
            &rewards,
        );

        assert_eq!(summary.positions.len(), 3);
        assert_eq!(summary.total.bonds, BigDecimal::from(100));
        assert_eq!(summary.total.unbonds, BigDecimal::from(10));
        assert_eq!(summary.total.withdrawable, BigDecimal::from(5));
        assert_eq!(summary.total.rewards, BigDecimal::from(1));
        assert_eq!(summary.total.total, BigDecimal::from(116));
    }

    #[test]
    fn unknown_validator_resolves_to_null_address() {
        let bonds = merge_positions(&[unbond(9, 100, 0)]);
        let empty = merge_positions::<Unbond>(&[]);
        let ids: Vec<i32> =
            validator_union(&[&bonds]).into_iter().collect();

        let summary = build_summary(
            &ids,
            &HashMap::new(),
            &bonds,
            &empty,
            &empty,
            &empty,
        );

        assert_eq!(summary.positions[0].validator_address, None);
    }

    #[test]
    fn empty_aggregation_is_all_zero() {
        let empty = merge_positions::<Unbond>(&[]);

        let summary = build_summary(
            &[],
            &HashMap::new(),
            &empty,
            &empty,
            &empty,
            &empty,
        );

        assert!(summary.positions.is_empty());
        assert_eq!(summary.total.total, BigDecimal::from(0));
    }
}
