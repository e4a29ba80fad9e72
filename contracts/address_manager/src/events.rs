use soroban_sdk::{ Address, Env, Symbol };

pub struct AddressManagerEvents {}

impl AddressManagerEvents {
    /// Emitted when the address manager is initialized
    ///
    /// - topics - `["initialize", manager: Address]`
    /// - data - ()
    pub fn initialize(env: &Env, manager: Address) {
        let topics = (Symbol::new(env, "initialize"), manager);
        env.events().publish(topics, ());
    }

    /// Emitted when a role binding is overwritten
    ///
    /// - topics - `["set_address", role: Symbol]`
    /// - data - `address: Address`
    pub fn set_address(env: &Env, role: Symbol, address: Address) {
        let topics = (Symbol::new(env, "set_address"), role);
        env.events().publish(topics, address);
    }

    /// Emitted when the manager hands its role to a new principal
    ///
    /// - topics - `["transfer_manager", previous: Address]`
    /// - data - `new_manager: Address`
    pub fn transfer_manager(env: &Env, previous: Address, new_manager: Address) {
        let topics = (Symbol::new(env, "transfer_manager"), previous);
        env.events().publish(topics, new_manager);
    }
}
