pub mod expolab_env;
