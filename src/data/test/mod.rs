mod boat;
mod race;
mod trail;
