mod leaves;
mod rebalance;

pub(crate) use self::leaves::Leaves;
pub(crate) use self::rebalance::rebalance;
