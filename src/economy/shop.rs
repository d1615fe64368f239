use bevy::prelude::*;
use crate::shared::*;

/// Cooldown between menu moves and confirmations.
pub const MENU_COOLDOWN_MS: u64 = 200;

/// One row of the trader's list: items are sold, seeds are bought.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopOption {
    Sell(ItemKind),
    Buy(CropKind),
}

/// Sell rows first, then buy rows.
pub fn shop_options() -> Vec<ShopOption> {
    ItemKind::ALL
        .iter()
        .map(|&item| ShopOption::Sell(item))
        .chain(CropKind::ALL.iter().map(|&seed| ShopOption::Buy(seed)))
        .collect()
}

/// Sell one `item`. Fails when none are held or the trader has no price.
pub fn sell(inventory: &mut Inventory, prices: &PriceList, item: ItemKind) -> bool {
    let Some(price) = prices.sale_price(item) else {
        return false;
    };
    if !inventory.take_item(item) {
        return false;
    }
    inventory.money = inventory.money.saturating_add(price);
    true
}

/// Buy one `seed`. Fails when the money does not cover the price.
pub fn buy(inventory: &mut Inventory, prices: &PriceList, seed: CropKind) -> bool {
    let Some(price) = prices.purchase_price(seed) else {
        return false;
    };
    if inventory.money < price {
        return false;
    }
    inventory.money -= price;
    inventory.add_seed(seed, 1);
    true
}

pub fn confirm(inventory: &mut Inventory, prices: &PriceList, option: ShopOption) -> bool {
    match option {
        ShopOption::Sell(item) => sell(inventory, prices, item),
        ShopOption::Buy(seed) => buy(inventory, prices, seed),
    }
}

#[derive(Resource, Debug, Clone)]
pub struct ShopMenu {
    pub options: Vec<ShopOption>,
    pub cursor: MenuCursor,
    pub cooldown: ActionTimer,
}

impl Default for ShopMenu {
    fn default() -> Self {
        let options = shop_options();
        Self {
            cursor: MenuCursor::new(options.len()),
            options,
            cooldown: ActionTimer::new(MENU_COOLDOWN_MS),
        }
    }
}

impl ShopMenu {
    pub fn selected(&self) -> Option<ShopOption> {
        self.options.get(self.cursor.index).copied()
    }
}

/// Fresh cursor on every visit. The cooldown starts running so the key that
/// opened the shop does not also buy something.
pub fn open_shop(mut menu: ResMut<ShopMenu>) {
    *menu = ShopMenu::default();
    menu.cooldown.activate();
}

pub fn shop_input(
    time: Res<Time>,
    input: Res<PlayerInput>,
    prices: Res<PriceList>,
    mut inventory: ResMut<Inventory>,
    mut menu: ResMut<ShopMenu>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    menu.cooldown.tick(time.delta());

    if input.ui_cancel {
        next_state.set(GameState::Playing);
        info!("[Economy] Leaving the shop with ${}", inventory.money);
        return;
    }
    if menu.cooldown.active() {
        return;
    }

    if input.ui_up {
        menu.cursor.up();
        menu.cooldown.activate();
    }
    if input.ui_down {
        menu.cursor.down();
        menu.cooldown.activate();
    }
    if input.ui_confirm {
        menu.cooldown.activate();
        if let Some(option) = menu.selected() {
            if confirm(&mut inventory, &prices, option) {
                debug!("[Economy] {:?} done, money now ${}", option, inventory.money);
            } else {
                debug!("[Economy] {:?} refused", option);
            }
        }
    }
}
