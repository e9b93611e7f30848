//! Order kind: the subtype-specific part of an order.
//!
//! A single `OrderInitialized` layout carries every subtype's fields as
//! nullable columns. `OrderKind` is the typed side of that union: the
//! `order_type` column is the discriminant and each variant owns exactly the
//! fields its subtype populates.

use rust_decimal::Decimal;

use crate::domain::shared::{
    DomainError, OrderType, Price, Quantity, TrailingOffsetType, TriggerType,
};

/// Trigger condition of a stop or if-touched order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger {
    /// Price at which the order is released.
    pub price: Price,
    /// Price source evaluated against the trigger.
    pub trigger_type: TriggerType,
}

/// Trailing distance of a trailing stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingOffset {
    /// Distance from the market.
    pub offset: Decimal,
    /// Unit of `offset`.
    pub offset_type: TrailingOffsetType,
}

/// Subtype-specific order parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderKind {
    /// Market order.
    Market,
    /// Limit order.
    Limit {
        /// Limit price.
        price: Price,
        /// Iceberg display quantity.
        display_qty: Option<Quantity>,
    },
    /// Stop market order.
    StopMarket {
        /// Stop trigger.
        trigger: Trigger,
    },
    /// Stop limit order.
    StopLimit {
        /// Limit price once triggered.
        price: Price,
        /// Stop trigger.
        trigger: Trigger,
        /// Iceberg display quantity.
        display_qty: Option<Quantity>,
    },
    /// Market-to-limit order.
    MarketToLimit {
        /// Iceberg display quantity.
        display_qty: Option<Quantity>,
    },
    /// Market-if-touched order.
    MarketIfTouched {
        /// Touch trigger.
        trigger: Trigger,
    },
    /// Limit-if-touched order.
    LimitIfTouched {
        /// Limit price once touched.
        price: Price,
        /// Touch trigger.
        trigger: Trigger,
        /// Iceberg display quantity.
        display_qty: Option<Quantity>,
    },
    /// Trailing stop market order.
    TrailingStopMarket {
        /// Current trigger price; unset until the venue activates the trail.
        trigger_price: Option<Price>,
        /// Price source for the trail.
        trigger_type: TriggerType,
        /// Trailing distance.
        trailing: TrailingOffset,
    },
    /// Trailing stop limit order.
    TrailingStopLimit {
        /// Current limit price; unset until activated.
        price: Option<Price>,
        /// Current trigger price; unset until activated.
        trigger_price: Option<Price>,
        /// Price source for the trail.
        trigger_type: TriggerType,
        /// Distance of the limit from the trigger.
        limit_offset: Decimal,
        /// Trailing distance.
        trailing: TrailingOffset,
        /// Iceberg display quantity.
        display_qty: Option<Quantity>,
    },
}

/// Flat view of every subtype-specific column, as read from a row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderKindParts {
    /// `price` column.
    pub price: Option<Price>,
    /// `trigger_price` column.
    pub trigger_price: Option<Price>,
    /// `trigger_type` column.
    pub trigger_type: Option<TriggerType>,
    /// `limit_offset` column.
    pub limit_offset: Option<Decimal>,
    /// `trailing_offset` column.
    pub trailing_offset: Option<Decimal>,
    /// `trailing_offset_type` column.
    pub trailing_offset_type: Option<TrailingOffsetType>,
    /// `display_qty` column.
    pub display_qty: Option<Quantity>,
}

impl OrderKind {
    /// The discriminant written to the `order_type` column.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        match self {
            Self::Market => OrderType::Market,
            Self::Limit { .. } => OrderType::Limit,
            Self::StopMarket { .. } => OrderType::StopMarket,
            Self::StopLimit { .. } => OrderType::StopLimit,
            Self::MarketToLimit { .. } => OrderType::MarketToLimit,
            Self::MarketIfTouched { .. } => OrderType::MarketIfTouched,
            Self::LimitIfTouched { .. } => OrderType::LimitIfTouched,
            Self::TrailingStopMarket { .. } => OrderType::TrailingStopMarket,
            Self::TrailingStopLimit { .. } => OrderType::TrailingStopLimit,
        }
    }

    /// Flatten into per-column values; unpopulated columns are `None`.
    #[must_use]
    pub fn parts(&self) -> OrderKindParts {
        let mut parts = OrderKindParts::default();
        match *self {
            Self::Market => {}
            Self::Limit { price, display_qty } => {
                parts.price = Some(price);
                parts.display_qty = display_qty;
            }
            Self::StopMarket { trigger } | Self::MarketIfTouched { trigger } => {
                parts.set_trigger(trigger);
            }
            Self::StopLimit {
                price,
                trigger,
                display_qty,
            }
            | Self::LimitIfTouched {
                price,
                trigger,
                display_qty,
            } => {
                parts.price = Some(price);
                parts.set_trigger(trigger);
                parts.display_qty = display_qty;
            }
            Self::MarketToLimit { display_qty } => {
                parts.display_qty = display_qty;
            }
            Self::TrailingStopMarket {
                trigger_price,
                trigger_type,
                trailing,
            } => {
                parts.trigger_price = trigger_price;
                parts.trigger_type = Some(trigger_type);
                parts.set_trailing(trailing);
            }
            Self::TrailingStopLimit {
                price,
                trigger_price,
                trigger_type,
                limit_offset,
                trailing,
                display_qty,
            } => {
                parts.price = price;
                parts.trigger_price = trigger_price;
                parts.trigger_type = Some(trigger_type);
                parts.limit_offset = Some(limit_offset);
                parts.set_trailing(trailing);
                parts.display_qty = display_qty;
            }
        }
        parts
    }

    /// Reassemble the subtype named by `order_type` from its columns.
    ///
    /// Columns the subtype does not use are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingField`] when a column the subtype
    /// requires is absent.
    pub fn from_parts(order_type: OrderType, parts: &OrderKindParts) -> Result<Self, DomainError> {
        let price = || parts.price.ok_or_else(|| DomainError::missing("price", order_type));
        let trigger = || -> Result<Trigger, DomainError> {
            Ok(Trigger {
                price: parts
                    .trigger_price
                    .ok_or_else(|| DomainError::missing("trigger_price", order_type))?,
                trigger_type: parts
                    .trigger_type
                    .ok_or_else(|| DomainError::missing("trigger_type", order_type))?,
            })
        };
        let trigger_type = || {
            parts
                .trigger_type
                .ok_or_else(|| DomainError::missing("trigger_type", order_type))
        };
        let trailing = || -> Result<TrailingOffset, DomainError> {
            Ok(TrailingOffset {
                offset: parts
                    .trailing_offset
                    .ok_or_else(|| DomainError::missing("trailing_offset", order_type))?,
                offset_type: parts
                    .trailing_offset_type
                    .ok_or_else(|| DomainError::missing("trailing_offset_type", order_type))?,
            })
        };

        Ok(match order_type {
            OrderType::Market => Self::Market,
            OrderType::Limit => Self::Limit {
                price: price()?,
                display_qty: parts.display_qty,
            },
            OrderType::StopMarket => Self::StopMarket { trigger: trigger()? },
            OrderType::StopLimit => Self::StopLimit {
                price: price()?,
                trigger: trigger()?,
                display_qty: parts.display_qty,
            },
            OrderType::MarketToLimit => Self::MarketToLimit {
                display_qty: parts.display_qty,
            },
            OrderType::MarketIfTouched => Self::MarketIfTouched { trigger: trigger()? },
            OrderType::LimitIfTouched => Self::LimitIfTouched {
                price: price()?,
                trigger: trigger()?,
                display_qty: parts.display_qty,
            },
            OrderType::TrailingStopMarket => Self::TrailingStopMarket {
                trigger_price: parts.trigger_price,
                trigger_type: trigger_type()?,
                trailing: trailing()?,
            },
            OrderType::TrailingStopLimit => Self::TrailingStopLimit {
                price: parts.price,
                trigger_price: parts.trigger_price,
                trigger_type: trigger_type()?,
                limit_offset: parts
                    .limit_offset
                    .ok_or_else(|| DomainError::missing("limit_offset", order_type))?,
                trailing: trailing()?,
                display_qty: parts.display_qty,
            },
        })
    }
}

impl OrderKindParts {
    fn set_trigger(&mut self, trigger: Trigger) {
        self.trigger_price = Some(trigger.price);
        self.trigger_type = Some(trigger.trigger_type);
    }

    fn set_trailing(&mut self, trailing: TrailingOffset) {
        self.trailing_offset = Some(trailing.offset);
        self.trailing_offset_type = Some(trailing.offset_type);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stop() -> OrderKind {
        OrderKind::StopMarket {
            trigger: Trigger {
                price: Price::new(dec!(99.50)),
                trigger_type: TriggerType::LastTrade,
            },
        }
    }

    #[test]
    fn market_has_no_variant_parts() {
        assert_eq!(OrderKind::Market.parts(), OrderKindParts::default());
    }

    #[test]
    fn stop_market_parts_only_carry_trigger() {
        let parts = stop().parts();
        assert_eq!(parts.trigger_price, Some(Price::new(dec!(99.50))));
        assert_eq!(parts.trigger_type, Some(TriggerType::LastTrade));
        assert!(parts.price.is_none());
        assert!(parts.display_qty.is_none());
    }

    #[test]
    fn parts_roundtrip_for_trailing_stop_limit() {
        let kind = OrderKind::TrailingStopLimit {
            price: None,
            trigger_price: Some(Price::new(dec!(10.05))),
            trigger_type: TriggerType::BidAsk,
            limit_offset: dec!(0.05),
            trailing: TrailingOffset {
                offset: dec!(25),
                offset_type: TrailingOffsetType::BasisPoints,
            },
            display_qty: Some(Quantity::from_u64(10)),
        };
        let rebuilt = OrderKind::from_parts(kind.order_type(), &kind.parts()).unwrap();
        assert_eq!(rebuilt, kind);
    }

    #[test]
    fn from_parts_ignores_columns_the_subtype_does_not_use() {
        let parts = OrderKindParts {
            price: Some(Price::new(dec!(1))),
            ..OrderKindParts::default()
        };
        assert_eq!(
            OrderKind::from_parts(OrderType::Market, &parts).unwrap(),
            OrderKind::Market
        );
    }

    #[test]
    fn from_parts_reports_missing_required_column() {
        let err = OrderKind::from_parts(OrderType::StopLimit, &OrderKindParts::default())
            .unwrap_err();
        assert_eq!(err, DomainError::missing("price", OrderType::StopLimit));
    }

    #[test]
    fn order_type_matches_variant() {
        assert_eq!(stop().order_type(), OrderType::StopMarket);
        assert_eq!(OrderKind::Market.order_type(), OrderType::Market);
    }
}
